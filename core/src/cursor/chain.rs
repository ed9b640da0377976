use super::{fuse::Fuse, Cursor};
use crate::step::Step;

#[must_use = "cursors do nothing unless pulled"]
pub struct Chain<A, B> {
    pub(crate) first: Fuse<A>,
    pub(crate) second: Fuse<B>,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first: Fuse::new(first),
            second: Fuse::new(second),
        }
    }
}

impl<A, B> Cursor for Chain<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        if !self.first.done {
            match self.first.pull() {
                Step::Done => {}
                next => return next,
            }
        }
        self.second.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();
        let upper = match (first_upper, second_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (first_lower.saturating_add(second_lower), upper)
    }
}
