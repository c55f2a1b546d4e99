//! Packed binary event codec.
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! [0:32)     id
//! [32:64)    pubkey
//! [64:128)   sig
//! [128:132)  created_at     u32
//! [132:134)  kind           u16
//! [134:136)  content length u16 (L)
//! [136:136+L) content
//! then       tag count      u16
//!   per tag:  item count    u8
//!     per item: length u16, then the item bytes
//! ```
//!
//! The header sits at fixed offsets so [`BinaryHeader::read`] can filter
//! events before paying for the tag section.

mod decoder;
mod encoder;

pub use decoder::{decode, BinaryHeader};
pub use encoder::{encode, encoded_len};

use crate::error::CodecError;
use crate::limits::is_eligible_for_binary;
use crate::{canonical, Event};

/// Size of the fixed part of the header, up to and including the content
/// length.
pub const HEADER_SIZE: usize = 136;

/// Output of [`encode_or_canonical`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packed {
    Binary(Vec<u8>),
    Json(String),
}

/// Encodes `event` as binary when it fits the binary size policy, and as
/// canonical JSON otherwise.
pub fn encode_or_canonical(event: &Event) -> Result<Packed, CodecError> {
    if is_eligible_for_binary(event) {
        return encode(event).map(Packed::Binary);
    }
    tracing::debug!(
        kind = event.kind,
        created_at = event.created_at,
        "event exceeds binary limits, falling back to canonical json"
    );
    canonical::to_json(event).map(Packed::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_kind_falls_back_to_json() {
        let event = Event {
            kind: 70000,
            ..Event::default()
        };
        match encode_or_canonical(&event).unwrap() {
            Packed::Json(json) => assert_eq!(canonical::from_json(&json).unwrap(), event),
            Packed::Binary(_) => panic!("expected json fallback"),
        }
    }

    #[test]
    fn eligible_event_is_binary() {
        let event = Event {
            kind: 1,
            ..Event::default()
        };
        assert_eq!(
            encode_or_canonical(&event).unwrap(),
            Packed::Binary(encode(&event).unwrap())
        );
    }
}
