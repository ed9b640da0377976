use thiserror::Error;

pub type Result<T> = core::result::Result<T, SeqError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The value handed to a dynamic constructor is neither a collection nor
    /// something that can be pulled from.
    #[error("input is not iterable over {expected}")]
    InvalidInput { expected: &'static str },

    #[error("reduce of empty sequence with no initial value")]
    EmptyReduce,

    #[error("step must be positive, got {step}")]
    InvalidStep { step: i64 },
}
