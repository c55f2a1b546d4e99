//! NSON: canonical-looking event JSON with a positional descriptor table.
//!
//! Any JSON reader accepts NSON text as the canonical event object plus one
//! extra `nson` key. A reader that knows the shape uses that key instead:
//! it holds hex-encoded lengths of `kind`, `content` and every tag item, so
//! each field can be sliced out without tokenizing the document.
//!
//! ```text
//! "nson":"SS KK CCCC TT NN LLLL LLLL ... NN LLLL ..."
//!          |  |  |    |  |  '- escaped length of each item, u16
//!          |  |  |    |  '- items in this tag
//!          |  |  |    '- number of tags
//!          |  |  '- escaped content length, u16
//!          |  '- digits in kind
//!          '- number of descriptor bytes that follow
//! ```
//!
//! The reader assumes the exact key order and widths this encoder produces;
//! see [`constants`] for the fixed offsets.

pub mod constants;
mod encoder;
mod view;

pub use encoder::encode;
pub use view::{decode, NsonView};

use crate::error::CodecError;
use crate::{canonical, Event};

/// Encodes `event` as NSON, or as canonical JSON when it does not fit the
/// NSON shape (timestamp width, descriptor size or escaped lengths).
///
/// Either way the result is valid JSON for the event.
pub fn encode_or_canonical(event: &Event) -> Result<String, CodecError> {
    match encode(event) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::debug!(error = %err, "nson encode failed, falling back to canonical json");
            canonical::to_json(event)
        }
    }
}

/// Decodes NSON text, falling back to a general JSON decode when the text
/// does not carry the NSON prefix.
///
/// Malformed NSON (prefix present, contents inconsistent) is an error and is
/// not retried.
pub fn decode_or_canonical(text: &str) -> Result<Event, CodecError> {
    match decode(text) {
        Err(CodecError::NotNson) => canonical::from_json(text),
        result => result,
    }
}
