/// The outcome of a single pull on a [`Cursor`](crate::cursor::Cursor).
///
/// `NotYet` means the cursor consumed an upstream element without producing
/// one of its own (a filtered-out element, a skipped prefix, a growing
/// group). Pulling again resumes production where it left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<T> {
    NotYet,
    Ready(T),
    Done,
}

impl<T> Step<T> {
    #[inline]
    pub fn map<G, F>(self, f: F) -> Step<G>
    where
        F: FnOnce(T) -> G,
    {
        match self {
            Step::NotYet => Step::NotYet,
            Step::Ready(ready) => Step::Ready((f)(ready)),
            Step::Done => Step::Done,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(item) => Step::Ready(item),
            None => Step::Done,
        }
    }
}
