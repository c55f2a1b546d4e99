//! Binary event decoder.
//!
//! Input is untrusted. Every length read from the buffer is checked against
//! the bytes that remain before anything is sliced or allocated, so forged
//! prefixes surface as [`CodecError::MalformedInput`].

use event_pack_buffers::Reader;

use crate::error::CodecError;
use crate::{Event, Tag};

/// Header fields of a binary event, borrowed from the encoded buffer.
///
/// Reading a header touches only the fixed 136-byte prefix and the content
/// bytes; the tag section is left undecoded in [`BinaryHeader::encoded_tags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryHeader<'a> {
    pub id: &'a [u8; 32],
    pub pubkey: &'a [u8; 32],
    pub sig: &'a [u8; 64],
    pub created_at: u32,
    pub kind: u16,
    pub content: &'a str,
    /// Everything after the content: the tag count and tag records.
    pub encoded_tags: &'a [u8],
}

impl<'a> BinaryHeader<'a> {
    /// Reads the header fields without decoding any tags.
    pub fn read(data: &'a [u8]) -> Result<Self, CodecError> {
        let mut reader = Reader::new(data);
        read_header(&mut reader)
    }
}

fn read_header<'a>(reader: &mut Reader<'a>) -> Result<BinaryHeader<'a>, CodecError> {
    let id = reader.try_array::<32>()?;
    let pubkey = reader.try_array::<32>()?;
    let sig = reader.try_array::<64>()?;
    let created_at = reader.try_u32()?;
    let kind = reader.try_u16()?;
    let content_length = reader.try_u16()? as usize;
    let content = reader.try_utf8(content_length)?;
    Ok(BinaryHeader {
        id,
        pubkey,
        sig,
        created_at,
        kind,
        content,
        encoded_tags: reader.rest(),
    })
}

fn read_tags(reader: &mut Reader<'_>) -> Result<Vec<Tag>, CodecError> {
    let tag_count = reader.try_u16()? as usize;
    // Each tag takes at least its one-byte item count.
    let mut tags = Vec::with_capacity(tag_count.min(reader.size()));
    for _ in 0..tag_count {
        let item_count = reader.try_u8()? as usize;
        // Each item takes at least its two-byte length.
        let mut items = Vec::with_capacity(item_count.min(reader.size() / 2));
        for _ in 0..item_count {
            let item_length = reader.try_u16()? as usize;
            items.push(reader.try_utf8(item_length)?.to_owned());
        }
        tags.push(Tag(items));
    }
    Ok(tags)
}

/// Decodes a full event from the packed binary layout.
///
/// Truncated input, lengths that run past the end, invalid UTF-8 and bytes
/// left over after the last tag all yield [`CodecError::MalformedInput`].
pub fn decode(data: &[u8]) -> Result<Event, CodecError> {
    let mut reader = Reader::new(data);
    let header = read_header(&mut reader)?;
    let tags = read_tags(&mut reader)?;
    if !reader.is_empty() {
        return Err(CodecError::MalformedInput);
    }
    Ok(Event {
        id: *header.id,
        pubkey: *header.pubkey,
        sig: *header.sig,
        created_at: u64::from(header.created_at),
        kind: u64::from(header.kind),
        content: header.content.to_owned(),
        tags,
    })
}
