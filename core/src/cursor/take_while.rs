use super::{filter::Predicate, fuse::Fuse, Cursor};
use crate::step::Step;

/// Yields upstream elements while `predicate(&item, index)` holds, then stops
/// for good.
///
/// The element that fails the predicate is consumed and dropped.
#[must_use = "cursors do nothing unless pulled"]
pub struct TakeWhile<C, P> {
    pub(crate) cursor: Fuse<C>,
    pub(crate) predicate: P,
    pub(crate) index: usize,
}

impl<C, P> TakeWhile<C, P> {
    pub(crate) fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor: Fuse::new(cursor),
            predicate,
            index: 0,
        }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn pull(&mut self) -> Step<Self::Item> {
        match self.cursor.pull() {
            Step::NotYet => Step::NotYet,
            Step::Ready(item) => {
                if self.predicate.test(&item, self.index) {
                    self.index += 1;
                    Step::Ready(item)
                } else {
                    self.cursor.done = true;
                    Step::Done
                }
            }
            Step::Done => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cursor.size_hint().1)
    }
}
