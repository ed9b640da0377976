use core::mem;

use super::Consumer;
use crate::{cursor::Cursor, step::Step};

#[must_use = "consumers do nothing unless you drive them"]
pub struct Collect<C, B> {
    pub(crate) cursor: C,
    pub(crate) collection: B,
}

impl<C, B: Default> Collect<C, B> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor,
            collection: B::default(),
        }
    }
}

impl<C, B> Consumer for Collect<C, B>
where
    C: Cursor,
    B: Default + Extend<C::Item>,
{
    type Output = B;

    fn consume(&mut self) -> Option<Self::Output> {
        match self.cursor.pull() {
            Step::NotYet => None,
            Step::Ready(item) => {
                self.collection.extend(Some(item));
                None
            }
            Step::Done => Some(mem::take(&mut self.collection)),
        }
    }
}
