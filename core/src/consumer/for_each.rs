use super::Consumer;
use crate::{cursor::Cursor, step::Step};

#[must_use = "consumers do nothing unless you drive them"]
pub struct ForEach<C, F> {
    pub(crate) cursor: C,
    pub(crate) f: F,
    pub(crate) index: usize,
}

impl<C, F> ForEach<C, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Self { cursor, f, index: 0 }
    }
}

impl<C, F> Consumer for ForEach<C, F>
where
    C: Cursor,
    F: FnMut(C::Item, usize),
{
    type Output = ();

    fn consume(&mut self) -> Option<()> {
        match self.cursor.pull() {
            Step::NotYet => None,
            Step::Ready(item) => {
                (self.f)(item, self.index);
                self.index += 1;
                None
            }
            Step::Done => Some(()),
        }
    }
}
