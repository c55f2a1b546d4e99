//! Canonical JSON form of an [`Event`].
//!
//! This is the interoperable baseline the binary and NSON codecs fall back
//! to. It is a thin wrapper over serde_json and the serde impls on
//! [`Event`].

use crate::error::CodecError;
use crate::Event;

pub fn to_json(event: &Event) -> Result<String, CodecError> {
    Ok(serde_json::to_string(event)?)
}

/// Parses canonical JSON. Unknown keys, including `nson`, are ignored.
pub fn from_json(text: &str) -> Result<Event, CodecError> {
    Ok(serde_json::from_str(text)?)
}
