pub mod collect;
pub mod fold;
pub mod for_each;
pub mod join;

/// An eager terminal operation, advanced one pull at a time.
///
/// Each call to [`consume`](Consumer::consume) pulls at most one element from
/// the underlying cursor and returns the final output once the cursor is
/// exhausted. A consumer must not be stepped again after it returned its
/// output.
#[must_use = "consumers do nothing unless you drive them"]
pub trait Consumer {
    type Output;

    fn consume(&mut self) -> Option<Self::Output>;
}

/// Steps `consumer` until it produces its output.
///
/// Never returns if the consumer reads from an unbounded cursor.
pub fn drive<C: Consumer>(mut consumer: C) -> C::Output {
    loop {
        if let Some(output) = consumer.consume() {
            return output;
        }
    }
}
