use core::mem;

use super::{fuse::Fuse, Cursor};
use crate::step::Step;

/// Decides whether a group is complete, given the group, the element just
/// appended to it and that element's upstream index.
pub trait Flush<T> {
    fn flush(&mut self, group: &[T], last: &T, index: usize) -> bool;
}

impl<T, F> Flush<T> for F
where
    F: FnMut(&[T], &T, usize) -> bool,
{
    #[inline]
    fn flush(&mut self, group: &[T], last: &T, index: usize) -> bool {
        self(group, last, index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLen(pub usize);

impl<T> Flush<T> for GroupLen {
    #[inline]
    fn flush(&mut self, group: &[T], _: &T, _: usize) -> bool {
        group.len() == self.0
    }
}

/// Groups upstream elements into vectors.
///
/// Each pulled element is appended to the current group, then
/// `flush(&group, &last, index)` decides whether the group is complete. A
/// complete group is yielded and a new, empty one started. When the upstream
/// is exhausted a non-empty trailing group is yielded only if `yield_rest` is
/// set, and discarded otherwise.
#[must_use = "cursors do nothing unless pulled"]
pub struct AccumulateWhile<C: Cursor, F> {
    pub(crate) cursor: Fuse<C>,
    pub(crate) flush: F,
    pub(crate) group: Vec<C::Item>,
    pub(crate) index: usize,
    pub(crate) yield_rest: bool,
}

impl<C: Cursor, F> AccumulateWhile<C, F> {
    pub(crate) fn new(cursor: C, flush: F, yield_rest: bool) -> Self {
        Self {
            cursor: Fuse::new(cursor),
            flush,
            group: Vec::new(),
            index: 0,
            yield_rest,
        }
    }
}

impl<C, F> Cursor for AccumulateWhile<C, F>
where
    C: Cursor,
    F: Flush<C::Item>,
{
    type Item = Vec<C::Item>;

    fn pull(&mut self) -> Step<Self::Item> {
        match self.cursor.pull() {
            Step::NotYet => Step::NotYet,
            Step::Ready(item) => {
                let index = self.index;
                self.index += 1;
                self.group.push(item);
                let complete = match self.group.last() {
                    Some(last) => self.flush.flush(&self.group, last, index),
                    None => false,
                };
                if complete {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(len = self.group.len(), index, "group flushed");
                    Step::Ready(mem::take(&mut self.group))
                } else {
                    Step::NotYet
                }
            }
            Step::Done => {
                if self.group.is_empty() {
                    return Step::Done;
                }
                let rest = mem::take(&mut self.group);
                if self.yield_rest {
                    Step::Ready(rest)
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(len = rest.len(), "trailing group discarded");
                    Step::Done
                }
            }
        }
    }
}
