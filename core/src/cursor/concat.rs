use std::collections::VecDeque;

use super::Cursor;
use crate::step::Step;

#[must_use = "cursors do nothing unless pulled"]
pub struct Concat<C> {
    pub(crate) sources: VecDeque<C>,
}

impl<C> Concat<C> {
    pub(crate) fn new(sources: impl IntoIterator<Item = C>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
        }
    }
}

impl<C: Cursor> Cursor for Concat<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        while let Some(source) = self.sources.front_mut() {
            match source.pull() {
                Step::Done => {
                    self.sources.pop_front();
                }
                next => return next,
            }
        }
        Step::Done
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources.iter().fold((0, Some(0)), |(lower, upper), source| {
            let (l, u) = source.size_hint();
            let upper = match (upper, u) {
                (Some(a), Some(b)) => a.checked_add(b),
                _ => None,
            };
            (lower.saturating_add(l), upper)
        })
    }
}
