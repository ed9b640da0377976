//! Lazy, pull-based sequence combinators.
//!
//! A [`Seq`] wraps a single [`Cursor`], a source that produces one element per
//! pull. Operators such as [`map`](Wrapper::map), [`merge`](Wrapper::merge) or
//! [`accumulate_n`](Wrapper::accumulate_n) move the cursor into a new state
//! machine and return a new wrapper; nothing is pulled until a terminal
//! operator ([`to_vec`](Wrapper::to_vec), [`reduce`](Wrapper::reduce),
//! [`join`](Wrapper::join), ...) or external iteration drives the chain.
//!
//! ```
//! use seq_fusion::prelude::*;
//!
//! let chunks = Seq::counter(3)
//!     .take(7)
//!     .accumulate_n(2, true)
//!     .to_vec();
//! assert_eq!(chunks, [vec![0, 3], vec![6, 9], vec![12, 15], vec![18]]);
//! ```

pub mod consumer;
pub mod cursor;
pub mod error;
pub mod seq;
pub mod step;

pub use cursor::{BoxCursor, Cursor, IntoCursor};
pub use error::{Result, SeqError};
pub use seq::{Seq, Wrapper};
pub use step::Step;

pub mod prelude {
    pub use crate::{
        cursor::{range::RangeArgs, Cursor, IntoCursor},
        error::SeqError,
        seq::{Seq, Wrapper},
        step::Step,
    };
}
