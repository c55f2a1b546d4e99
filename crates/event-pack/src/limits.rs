//! Per-codec size policy.
//!
//! The [`Event`] model itself is unbounded. The binary codec stores each
//! length in a fixed-width integer, and NSON relies on a fixed-width
//! timestamp and a one-byte descriptor length, so each codec checks a record
//! against these bounds before encoding.
//!
//! The two codecs disagree on `kind` and `created_at`: binary caps them at
//! 16 and 32 bits, NSON at the digit count its descriptor byte can record
//! and a 10-digit timestamp window. A record can therefore be valid for one
//! and not the other.

use crate::error::Field;
use crate::Event;

pub const MAX_CREATED_AT: u64 = u32::MAX as u64;
pub const MAX_KIND: u64 = u16::MAX as u64;
pub const MAX_CONTENT_SIZE: usize = u16::MAX as usize;
pub const MAX_TAG_COUNT: usize = u16::MAX as usize;
pub const MAX_TAG_ITEM_COUNT: usize = u8::MAX as usize;
pub const MAX_TAG_ITEM_SIZE: usize = u16::MAX as usize;

/// Smallest timestamp that renders as 10 decimal digits.
pub const NSON_MIN_CREATED_AT: u64 = 1_000_000_000;
/// Largest timestamp that renders as 10 decimal digits.
pub const NSON_MAX_CREATED_AT: u64 = 9_999_999_999;
/// The descriptor length is itself stored in one byte.
pub const NSON_MAX_DESCRIPTOR_SIZE: usize = u8::MAX as usize;
/// Longest escaped string interior a descriptor entry can record.
pub const NSON_MAX_ESCAPED_SIZE: usize = u16::MAX as usize;

/// Returns the first binary-codec bound that `event` violates.
///
/// Bounds are checked in the order created_at, kind, content, tag count,
/// then tag by tag: item count before item sizes.
pub fn check_binary(event: &Event) -> Result<(), Field> {
    if event.created_at > MAX_CREATED_AT {
        return Err(Field::CreatedAt);
    }
    if event.kind > MAX_KIND {
        return Err(Field::Kind);
    }
    if event.content.len() > MAX_CONTENT_SIZE {
        return Err(Field::Content);
    }
    if event.tags.len() > MAX_TAG_COUNT {
        return Err(Field::TagCount);
    }
    for tag in &event.tags {
        if tag.len() > MAX_TAG_ITEM_COUNT {
            return Err(Field::TagItemCount);
        }
        if tag.items().iter().any(|item| item.len() > MAX_TAG_ITEM_SIZE) {
            return Err(Field::TagItemSize);
        }
    }
    Ok(())
}

/// Whether `event` fits the binary codec's field widths.
///
/// Callers that get `false` should encode canonical JSON instead.
pub fn is_eligible_for_binary(event: &Event) -> bool {
    check_binary(event).is_ok()
}

/// Number of descriptor bytes NSON needs for `event`, excluding the size
/// byte: kind digits, content length, tag count, then one count byte and two
/// length bytes per item for every tag.
pub fn nson_descriptor_size(event: &Event) -> usize {
    event
        .tags
        .iter()
        .fold(4, |size, tag| size.saturating_add(1 + 2 * tag.len()))
}

/// Whether `created_at` fits NSON's fixed 10-digit timestamp field.
pub fn nson_timestamp_fits(created_at: u64) -> bool {
    (NSON_MIN_CREATED_AT..=NSON_MAX_CREATED_AT).contains(&created_at)
}
