use super::Cursor;
use crate::step::Step;

#[must_use = "cursors do nothing unless pulled"]
pub struct Fuse<C> {
    pub(crate) cursor: C,
    pub(crate) done: bool,
}

impl<C> Fuse<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<C: Cursor> Cursor for Fuse<C> {
    type Item = C::Item;

    #[inline]
    fn pull(&mut self) -> Step<C::Item> {
        if self.done {
            Step::Done
        } else {
            let next = self.cursor.pull();
            if let Step::Done = next {
                self.done = true;
            }
            next
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.cursor.size_hint()
        }
    }
}
