//! Binary event encoder.

use event_pack_buffers::Writer;

use super::HEADER_SIZE;
use crate::error::CodecError;
use crate::limits::check_binary;
use crate::Event;

/// Exact number of bytes [`encode`] produces for `event`.
///
/// `136 + content + 2 + Σ_tags(1 + Σ_items(2 + item))`. Meaningful only for
/// records that pass [`check_binary`].
pub fn encoded_len(event: &Event) -> usize {
    let tags: usize = event
        .tags
        .iter()
        .map(|tag| 1 + tag.items().iter().map(|item| 2 + item.len()).sum::<usize>())
        .sum();
    HEADER_SIZE + event.content.len() + 2 + tags
}

/// Encodes `event` into the packed binary layout.
///
/// Fails with [`CodecError::SizeExceeded`] naming the first field that does
/// not fit. The output is allocated once, at its exact final size.
pub fn encode(event: &Event) -> Result<Vec<u8>, CodecError> {
    check_binary(event).map_err(|field| CodecError::SizeExceeded { field })?;

    let size = encoded_len(event);
    let mut writer = Writer::with_capacity(size);
    writer.buf(&event.id);
    writer.buf(&event.pubkey);
    writer.buf(&event.sig);
    // The casts below are lossless: check_binary bounded every value.
    writer.u32(event.created_at as u32);
    writer.u16(event.kind as u16);
    writer.u16(event.content.len() as u16);
    writer.utf8(&event.content);
    writer.u16(event.tags.len() as u16);
    for tag in &event.tags {
        writer.u8(tag.len() as u8);
        for item in tag.items() {
            writer.u16(item.len() as u16);
            writer.utf8(item);
        }
    }
    debug_assert_eq!(writer.len(), size);
    Ok(writer.flush())
}
