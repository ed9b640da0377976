use super::Cursor;
use crate::step::Step;

/// Interleaves a set of cursors one element at a time.
///
/// Each round visits the still-active sources in their original order and
/// pulls one element from each. A source that reports exhaustion is removed
/// from the set at its position, so it is skipped for the rest of the round
/// and never pulled again. The sequence ends when the set is empty.
///
/// A source that answers [`Step::NotYet`] keeps its turn: the next pull goes
/// to the same source, so discarded upstream elements never shift the
/// interleaving order.
#[must_use = "cursors do nothing unless pulled"]
pub struct RoundRobin<C> {
    pub(crate) active: Vec<C>,
    pub(crate) position: usize,
}

impl<C> RoundRobin<C> {
    pub(crate) fn new(sources: impl IntoIterator<Item = C>) -> Self {
        Self {
            active: sources.into_iter().collect(),
            position: 0,
        }
    }

    /// Number of sources that have not reported exhaustion yet.
    pub fn active(&self) -> usize {
        self.active.len()
    }
}

impl<C: Cursor> Cursor for RoundRobin<C> {
    type Item = C::Item;

    fn pull(&mut self) -> Step<Self::Item> {
        loop {
            if self.active.is_empty() {
                return Step::Done;
            }
            if self.position >= self.active.len() {
                self.position = 0;
            }
            match self.active[self.position].pull() {
                Step::NotYet => return Step::NotYet,
                Step::Ready(item) => {
                    self.position += 1;
                    return Step::Ready(item);
                }
                Step::Done => {
                    self.active.remove(self.position);
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        position = self.position,
                        remaining = self.active.len(),
                        "round-robin source exhausted"
                    );
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.active.iter().fold((0, Some(0)), |(lower, upper), source| {
            let (l, u) = source.size_hint();
            let upper = match (upper, u) {
                (Some(a), Some(b)) => a.checked_add(b),
                _ => None,
            };
            (lower.saturating_add(l), upper)
        })
    }
}
