//! Buffer error type.

use thiserror::Error;

/// Error returned by the bounds-checked [`crate::Reader`] methods.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("unexpected bytes")]
    Mismatch,
}
