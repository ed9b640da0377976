use super::Cursor;
use crate::step::Step;

#[must_use = "cursors do nothing unless pulled"]
pub struct Map<C, F> {
    pub(crate) cursor: C,
    pub(crate) f: F,
    pub(crate) index: usize,
}

impl<C, F> Map<C, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Self {
            cursor,
            f,
            index: 0,
        }
    }
}

impl<C, F, T> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item, usize) -> T,
{
    type Item = T;

    #[inline]
    fn pull(&mut self) -> Step<Self::Item> {
        self.cursor.pull().map(|item| {
            let index = self.index;
            self.index += 1;
            (self.f)(item, index)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}
