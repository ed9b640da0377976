use super::Cursor;
use crate::step::Step;

/// Reports exhaustion instead of overflowing `i64`.
#[derive(Debug, Clone)]
#[must_use = "cursors do nothing unless pulled"]
pub struct Counter {
    pub(crate) next: Option<i64>,
    pub(crate) step: i64,
}

impl Counter {
    pub(crate) fn new(step: i64) -> Self {
        Self {
            next: Some(0),
            step,
        }
    }
}

impl Cursor for Counter {
    type Item = i64;

    #[inline]
    fn pull(&mut self) -> Step<i64> {
        match self.next {
            Some(current) => {
                self.next = current.checked_add(self.step);
                Step::Ready(current)
            }
            None => Step::Done,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(next) = self.next else {
            return (0, Some(0));
        };
        if self.step == 0 {
            return (usize::MAX, None);
        }
        let span = if self.step > 0 {
            next.abs_diff(i64::MAX)
        } else {
            next.abs_diff(i64::MIN)
        };
        (span / self.step.unsigned_abs())
            .checked_add(1)
            .and_then(|len| usize::try_from(len).ok())
            .map_or((usize::MAX, None), |len| (len, Some(len)))
    }
}
