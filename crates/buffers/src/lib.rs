//! event-pack-buffers - cursor primitives for fixed-layout binary formats.
//!
//! [`Reader`] never indexes past the end of its slice: every read checks the
//! remaining length first and reports [`BufferError::EndOfBuffer`] instead.
//! [`Writer`] is sized once up front by callers that know the exact output
//! length.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
