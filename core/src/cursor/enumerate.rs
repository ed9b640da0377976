use super::Cursor;
use crate::step::Step;

#[must_use = "cursors do nothing unless pulled"]
pub struct Enumerate<C> {
    pub(crate) cursor: C,
    pub(crate) index: usize,
}

impl<C> Enumerate<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self { cursor, index: 0 }
    }
}

impl<C: Cursor> Cursor for Enumerate<C> {
    type Item = (usize, C::Item);

    #[inline]
    fn pull(&mut self) -> Step<Self::Item> {
        self.cursor.pull().map(|item| {
            let index = self.index;
            self.index += 1;
            (index, item)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}
