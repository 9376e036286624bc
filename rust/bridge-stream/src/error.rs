//! Error type shared by every stream read/write.

use thiserror::Error;

/// Failure reported by a [`Stream`](crate::Stream) operation.
///
/// Reads never return zero-filled or partially decoded values: any shortfall
/// surfaces as one of these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// Fewer unread bytes remain than the value being decoded requires.
    #[error("truncated input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// A length or element count prefix decoded to a negative number.
    #[error("negative length prefix: {0}")]
    NegativeLength(i32),

    /// A payload is too long for its 32-bit signed length prefix.
    #[error("length {0} does not fit in a 32-bit length prefix")]
    LengthOverflow(usize),

    /// A string payload is not valid UTF-8. The payload bytes were consumed.
    #[error("invalid UTF-8 in {len}-byte string payload: {source}")]
    InvalidUtf8 {
        len: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

pub type Result<T, E = StreamError> = std::result::Result<T, E>;
