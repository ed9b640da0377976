use super::Consumer;
use crate::{
    cursor::Cursor,
    error::{Result, SeqError},
    step::Step,
};

/// Folds every element into an explicit initial accumulator. The first
/// folded element has index 0.
#[must_use = "consumers do nothing unless you drive them"]
pub struct Fold<C, F, T> {
    pub(crate) cursor: C,
    pub(crate) f: F,
    pub(crate) acc: Option<T>,
    pub(crate) index: usize,
}

impl<C, F, T> Fold<C, F, T> {
    pub(crate) fn new(cursor: C, init: T, f: F) -> Self {
        Self {
            cursor,
            f,
            acc: Some(init),
            index: 0,
        }
    }
}

impl<C, F, T> Consumer for Fold<C, F, T>
where
    C: Cursor,
    F: FnMut(T, C::Item, usize) -> T,
{
    type Output = T;

    fn consume(&mut self) -> Option<T> {
        match self.cursor.pull() {
            Step::NotYet => None,
            Step::Ready(item) => {
                if let Some(acc) = self.acc.take() {
                    self.acc = Some((self.f)(acc, item, self.index));
                }
                self.index += 1;
                None
            }
            Step::Done => self.acc.take(),
        }
    }
}

/// Folds every element after the first into the first.
///
/// The first element is the seed and occupies index 0, so the first element
/// handed to `f` has index 1.
#[must_use = "consumers do nothing unless you drive them"]
pub struct Reduce<C: Cursor, F> {
    pub(crate) cursor: C,
    pub(crate) f: F,
    pub(crate) acc: Option<C::Item>,
    pub(crate) index: usize,
}

impl<C: Cursor, F> Reduce<C, F> {
    pub(crate) fn new(cursor: C, f: F) -> Self {
        Self {
            cursor,
            f,
            acc: None,
            index: 0,
        }
    }
}

impl<C, F> Consumer for Reduce<C, F>
where
    C: Cursor,
    F: FnMut(C::Item, C::Item, usize) -> C::Item,
{
    type Output = Result<C::Item>;

    fn consume(&mut self) -> Option<Self::Output> {
        match self.cursor.pull() {
            Step::NotYet => None,
            Step::Ready(item) => {
                self.acc = Some(match self.acc.take() {
                    Some(acc) => (self.f)(acc, item, self.index),
                    None => item,
                });
                self.index += 1;
                None
            }
            Step::Done => Some(self.acc.take().ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::debug!("reduce of empty sequence");
                SeqError::EmptyReduce
            })),
        }
    }
}
