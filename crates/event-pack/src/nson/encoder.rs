//! NSON encoder.

use super::constants::*;
use crate::error::{CodecError, Field};
use crate::escape::{escaped_len, write_escaped};
use crate::limits::{nson_descriptor_size, nson_timestamp_fits, NSON_MAX_DESCRIPTOR_SIZE, NSON_MAX_ESCAPED_SIZE};
use crate::Event;

/// Escaped length of `s`, or `SizeExceeded { field }` when a descriptor
/// entry cannot hold it.
fn checked_escaped_len(s: &str, field: Field) -> Result<u16, CodecError> {
    let len = escaped_len(s);
    if len > NSON_MAX_ESCAPED_SIZE {
        return Err(CodecError::SizeExceeded { field });
    }
    Ok(len as u16)
}

/// Writes the tags array and fills the tag part of `descriptors`.
fn write_tags(event: &Event, descriptors: &mut Vec<u8>) -> Result<String, CodecError> {
    let mut item_bytes = 0;
    for tag in &event.tags {
        for item in tag.items() {
            item_bytes += checked_escaped_len(item, Field::TagItemSize)? as usize + 3;
        }
        item_bytes += 2;
    }
    let mut out = String::with_capacity(item_bytes + 2);

    // nson_descriptor_size bounded the tag and item counts below 256.
    descriptors.push(event.tags.len() as u8);
    out.push('[');
    for (t, tag) in event.tags.iter().enumerate() {
        if t > 0 {
            out.push(',');
        }
        descriptors.push(tag.len() as u8);
        out.push('[');
        for (i, item) in tag.items().iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            descriptors.extend_from_slice(&(escaped_len(item) as u16).to_be_bytes());
            out.push('"');
            write_escaped(&mut out, item);
            out.push('"');
        }
        out.push(']');
    }
    out.push(']');
    Ok(out)
}

/// Encodes `event` as NSON text.
///
/// Fails with [`CodecError::TimestampWidth`] when `created_at` is not a
/// 10-digit number, [`CodecError::DescriptorOverflow`] when the tags need
/// more than 255 descriptor bytes, and [`CodecError::SizeExceeded`] when an
/// escaped string is longer than a descriptor entry can record.
pub fn encode(event: &Event) -> Result<String, CodecError> {
    if !nson_timestamp_fits(event.created_at) {
        return Err(CodecError::TimestampWidth {
            created_at: event.created_at,
        });
    }
    let descriptor_size = nson_descriptor_size(event);
    if descriptor_size > NSON_MAX_DESCRIPTOR_SIZE {
        return Err(CodecError::DescriptorOverflow {
            size: descriptor_size,
        });
    }

    let mut descriptors = Vec::with_capacity(descriptor_size);
    // Kind digits and content length are patched in once known.
    descriptors.extend_from_slice(&[0, 0, 0]);
    let tags = write_tags(event, &mut descriptors)?;
    debug_assert_eq!(descriptors.len(), descriptor_size);

    let kind = event.kind.to_string();
    descriptors[0] = kind.len() as u8;
    let content_len = checked_escaped_len(&event.content, Field::Content)?;
    descriptors[1..3].copy_from_slice(&content_len.to_be_bytes());

    let size = DESCRIPTORS_START
        + 2 * descriptor_size
        + KIND_PREFIX.len()
        + kind.len()
        + CONTENT_PREFIX.len()
        + content_len as usize
        + TAGS_PREFIX.len()
        + tags.len()
        + 1;
    let mut out = String::with_capacity(size);
    out.push_str(r#"{"id":""#);
    out.push_str(&hex::encode(event.id));
    out.push_str(r#"","pubkey":""#);
    out.push_str(&hex::encode(event.pubkey));
    out.push_str(r#"","sig":""#);
    out.push_str(&hex::encode(event.sig));
    out.push_str(r#"","created_at":"#);
    out.push_str(&event.created_at.to_string());
    out.push_str(r#","nson":""#);
    out.push_str(&hex::encode([descriptor_size as u8]));
    out.push_str(&hex::encode(&descriptors));
    out.push_str(r#"","kind":"#);
    out.push_str(&kind);
    out.push_str(r#","content":""#);
    write_escaped(&mut out, &event.content);
    out.push_str(r#"","tags":"#);
    out.push_str(&tags);
    out.push('}');
    debug_assert_eq!(out.len(), size);
    Ok(out)
}
