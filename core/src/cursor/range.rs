use super::Cursor;
use crate::{
    error::{Result, SeqError},
    step::Step,
};

/// Arguments accepted by [`Seq::range`](crate::Seq::range).
///
/// | argument         | elements                      |
/// |------------------|-------------------------------|
/// | `()`             | `0..=9`                       |
/// | `n`              | `0..=n - 1`                   |
/// | `(a, b)`         | `a..=b`                       |
/// | `(a, b, step)`   | `a..=b`, `step` apart         |
///
/// The direction follows the endpoints: when `b < a` the range walks
/// downwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RangeArgs {
    #[default]
    Default,
    Below(i64),
    Between(i64, i64),
    Stepped(i64, i64, i64),
}

impl From<()> for RangeArgs {
    fn from(_: ()) -> Self {
        RangeArgs::Default
    }
}

impl From<i64> for RangeArgs {
    fn from(n: i64) -> Self {
        RangeArgs::Below(n)
    }
}

impl From<(i64, i64)> for RangeArgs {
    fn from((start, end): (i64, i64)) -> Self {
        RangeArgs::Between(start, end)
    }
}

impl From<(i64, i64, i64)> for RangeArgs {
    fn from((start, end, step): (i64, i64, i64)) -> Self {
        RangeArgs::Stepped(start, end, step)
    }
}

#[derive(Debug, Clone)]
#[must_use = "cursors do nothing unless pulled"]
pub struct Range {
    pub(crate) next: i64,
    pub(crate) step: i64,
    pub(crate) remaining: u64,
}

impl Range {
    pub(crate) fn new(args: RangeArgs) -> Result<Self> {
        let (start, end, step) = match args {
            RangeArgs::Default => (0, 9, 1),
            RangeArgs::Below(n) => (0, n.saturating_sub(1), 1),
            RangeArgs::Between(start, end) => (start, end, 1),
            RangeArgs::Stepped(start, end, step) => {
                if step < 1 {
                    return Err(SeqError::InvalidStep { step });
                }
                (start, end, step)
            }
        };

        let delta = start.abs_diff(end) / step.unsigned_abs();
        let step = if end < start { -step } else { step };

        #[cfg(feature = "tracing")]
        tracing::debug!(start, end, step, len = delta.saturating_add(1), "range");

        Ok(Self {
            next: start,
            step,
            remaining: delta.saturating_add(1),
        })
    }
}

impl Cursor for Range {
    type Item = i64;

    #[inline]
    fn pull(&mut self) -> Step<i64> {
        if self.remaining == 0 {
            return Step::Done;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.step;
        }
        Step::Ready(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}
