use core::mem;

use super::Consumer;
use crate::{cursor::Cursor, step::Step};

#[must_use = "consumers do nothing unless you drive them"]
pub struct Join<'d, C> {
    pub(crate) cursor: C,
    pub(crate) delimiter: &'d str,
    pub(crate) buf: String,
    pub(crate) empty: bool,
}

impl<'d, C> Join<'d, C> {
    pub(crate) fn new(cursor: C, delimiter: &'d str) -> Self {
        Self {
            cursor,
            delimiter,
            buf: String::new(),
            empty: true,
        }
    }
}

impl<C> Consumer for Join<'_, C>
where
    C: Cursor,
    C::Item: core::fmt::Display,
{
    type Output = String;

    fn consume(&mut self) -> Option<String> {
        match self.cursor.pull() {
            Step::NotYet => None,
            Step::Ready(item) => {
                if !self.empty {
                    self.buf.push_str(self.delimiter);
                }
                self.empty = false;
                self.buf.push_str(&item.to_string());
                None
            }
            Step::Done => Some(mem::take(&mut self.buf)),
        }
    }
}
