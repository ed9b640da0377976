use super::Cursor;
use crate::step::Step;

pub trait Predicate<T> {
    fn test(&mut self, item: &T, index: usize) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: FnMut(&T, usize) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T, index: usize) -> bool {
        self(item, index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexBelow(pub usize);

impl<T> Predicate<T> for IndexBelow {
    #[inline]
    fn test(&mut self, _: &T, index: usize) -> bool {
        index < self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFrom(pub usize);

impl<T> Predicate<T> for IndexFrom {
    #[inline]
    fn test(&mut self, _: &T, index: usize) -> bool {
        index >= self.0
    }
}

/// Holds for indices divisible by `n`. Never holds for `n == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMultipleOf(pub usize);

impl<T> Predicate<T> for IndexMultipleOf {
    #[inline]
    fn test(&mut self, _: &T, index: usize) -> bool {
        self.0 != 0 && index % self.0 == 0
    }
}

/// Yields the upstream elements for which `predicate(&item, index)` holds.
///
/// The index counts every upstream element, including rejected ones.
#[must_use = "cursors do nothing unless pulled"]
pub struct Filter<C, P> {
    pub(crate) cursor: C,
    pub(crate) predicate: P,
    pub(crate) index: usize,
}

impl<C, P> Filter<C, P> {
    pub(crate) fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            index: 0,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
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
                let index = self.index;
                self.index += 1;
                if self.predicate.test(&item, index) {
                    Step::Ready(item)
                } else {
                    Step::NotYet
                }
            }
            Step::Done => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.cursor.size_hint().1)
    }
}
