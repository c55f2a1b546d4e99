//! Codec error type.

use std::fmt;

use event_pack_buffers::BufferError;
use thiserror::Error;

/// A record field that a codec bounds to a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CreatedAt,
    Kind,
    Content,
    TagCount,
    TagItemCount,
    TagItemSize,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CreatedAt => "created_at",
            Field::Kind => "kind",
            Field::Content => "content",
            Field::TagCount => "tag_count",
            Field::TagItemCount => "tag_item_count",
            Field::TagItemSize => "tag_item_size",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the binary and NSON codecs and the canonical JSON
/// binding.
///
/// None of these are fatal. Encode-side errors tell the caller to use
/// canonical JSON instead; [`CodecError::NotNson`] tells it to run a general
/// JSON decode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("{field} exceeds the codec's representable width")]
    SizeExceeded { field: Field },
    #[error("nson descriptor table needs {size} bytes, max is 255")]
    DescriptorOverflow { size: usize },
    #[error("created_at {created_at} does not render as exactly 10 digits")]
    TimestampWidth { created_at: u64 },
    #[error("malformed input")]
    MalformedInput,
    #[error("not nson")]
    NotNson,
    #[error("invalid json: {0}")]
    InvalidJson(String),
}

impl From<BufferError> for CodecError {
    fn from(_: BufferError) -> Self {
        CodecError::MalformedInput
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(_: hex::FromHexError) -> Self {
        CodecError::MalformedInput
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::InvalidJson(err.to_string())
    }
}
