//! Positional NSON reader.
//!
//! The fixed prefix is checked once, on construction. Everything after it is
//! located through the descriptor table: each separator the walk expects is
//! compared at its computed offset, and each length is checked against the
//! text before it is trusted. No delimiter scanning and no general JSON
//! tokenizing happen on this path.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::OnceLock;

use event_pack_buffers::Reader;

use super::constants::*;
use crate::error::CodecError;
use crate::escape::unescape;
use crate::limits::nson_timestamp_fits;
use crate::{Event, Tag};

/// Byte ranges of the variable fields, derived from the descriptor table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Layout {
    kind: u64,
    content: Range<usize>,
    tags: Vec<Vec<Range<usize>>>,
}

/// Advances `text` by `len` bytes and returns the range it passed over.
fn take(text: &mut Reader<'_>, len: usize) -> Result<Range<usize>, CodecError> {
    let start = text.x;
    text.try_skip(len)?;
    Ok(start..text.x)
}

/// Takes a `"`-delimited string whose interior is `len` bytes long and
/// returns the interior range.
fn take_string(text: &mut Reader<'_>, len: usize) -> Result<Range<usize>, CodecError> {
    text.try_expect(b"\"")?;
    let interior = take(text, len)?;
    text.try_expect(b"\"")?;
    Ok(interior)
}

fn parse_digits(digits: &[u8]) -> Result<u64, CodecError> {
    if digits.is_empty() {
        return Err(CodecError::MalformedInput);
    }
    digits.iter().try_fold(0u64, |acc, &b| {
        if !b.is_ascii_digit() {
            return Err(CodecError::MalformedInput);
        }
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(b - b'0')))
            .ok_or(CodecError::MalformedInput)
    })
}

fn parse_layout(bytes: &[u8]) -> Result<Layout, CodecError> {
    let mut size = [0u8; 1];
    let size_hex = bytes
        .get(SIZE_START..DESCRIPTORS_START)
        .ok_or(CodecError::MalformedInput)?;
    hex::decode_to_slice(size_hex, &mut size)?;
    let descriptors_end = DESCRIPTORS_START + 2 * size[0] as usize;
    let descriptors_hex = bytes
        .get(DESCRIPTORS_START..descriptors_end)
        .ok_or(CodecError::MalformedInput)?;
    let descriptors = hex::decode(descriptors_hex)?;

    let mut table = Reader::new(&descriptors);
    let mut text = Reader::new(bytes);
    text.x = descriptors_end;

    text.try_expect(KIND_PREFIX)?;
    let kind_chars = table.try_u8()? as usize;
    let kind_digits = take(&mut text, kind_chars)?;
    let kind_digits = &bytes[kind_digits];
    // JSON numbers have no leading zeros.
    if kind_digits.len() > 1 && kind_digits[0] == b'0' {
        return Err(CodecError::MalformedInput);
    }
    let kind = parse_digits(kind_digits)?;

    text.try_expect(CONTENT_PREFIX)?;
    let content_len = table.try_u16()? as usize;
    let content = take(&mut text, content_len)?;
    text.try_expect(TAGS_PREFIX)?;

    let tag_count = table.try_u8()? as usize;
    let mut tags = Vec::with_capacity(tag_count);
    text.try_expect(b"[")?;
    for t in 0..tag_count {
        if t > 0 {
            text.try_expect(b",")?;
        }
        text.try_expect(b"[")?;
        let item_count = table.try_u8()? as usize;
        let mut items = Vec::with_capacity(item_count);
        for i in 0..item_count {
            if i > 0 {
                text.try_expect(b",")?;
            }
            let item_len = table.try_u16()? as usize;
            items.push(take_string(&mut text, item_len)?);
        }
        text.try_expect(b"]")?;
        tags.push(items);
    }
    text.try_expect(b"]}")?;

    if !table.is_empty() || !text.is_empty() {
        return Err(CodecError::MalformedInput);
    }
    Ok(Layout {
        kind,
        content,
        tags,
    })
}

/// Read-only view over NSON text.
///
/// `id`, `pubkey`, `sig` and `created_at` are read straight from their fixed
/// offsets. The descriptor table is parsed on the first access to `kind`,
/// `content` or the tags, and the resulting layout is kept for the life of
/// the view.
///
/// ```
/// use event_pack::{nson, Event};
///
/// let event = Event { created_at: 1688505641, kind: 1, content: "hello".into(), ..Event::default() };
/// let text = nson::encode(&event).unwrap();
///
/// let view = nson::NsonView::new(&text).unwrap();
/// assert_eq!(view.created_at().unwrap(), 1688505641);
/// assert_eq!(view.content().unwrap(), "hello");
/// ```
#[derive(Debug)]
pub struct NsonView<'a> {
    text: &'a str,
    layout: OnceLock<Result<Layout, CodecError>>,
}

impl<'a> NsonView<'a> {
    /// Checks the fixed prefix of `text`.
    ///
    /// Returns [`CodecError::NotNson`] when any prefix literal, including the
    /// `nson` marker, is not at its fixed offset. The caller should then run
    /// a general JSON decode.
    pub fn new(text: &'a str) -> Result<Self, CodecError> {
        let bytes = text.as_bytes();
        let prefix_ok = PREFIX_LITERALS
            .iter()
            .all(|&(offset, literal)| bytes.get(offset..offset + literal.len()) == Some(literal));
        if !prefix_ok {
            tracing::trace!(len = text.len(), "text has no nson prefix");
            return Err(CodecError::NotNson);
        }
        Ok(Self {
            text,
            layout: OnceLock::new(),
        })
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    // The prefix check put an ASCII literal on both sides of each fixed
    // field, so these ranges fall on char boundaries.

    pub fn id_hex(&self) -> &'a str {
        &self.text[ID_START..ID_END]
    }

    pub fn pubkey_hex(&self) -> &'a str {
        &self.text[PUBKEY_START..PUBKEY_END]
    }

    pub fn sig_hex(&self) -> &'a str {
        &self.text[SIG_START..SIG_END]
    }

    pub fn id(&self) -> Result<[u8; 32], CodecError> {
        let mut out = [0u8; 32];
        hex::decode_to_slice(self.id_hex(), &mut out)?;
        Ok(out)
    }

    pub fn pubkey(&self) -> Result<[u8; 32], CodecError> {
        let mut out = [0u8; 32];
        hex::decode_to_slice(self.pubkey_hex(), &mut out)?;
        Ok(out)
    }

    pub fn sig(&self) -> Result<[u8; 64], CodecError> {
        let mut out = [0u8; 64];
        hex::decode_to_slice(self.sig_hex(), &mut out)?;
        Ok(out)
    }

    /// Parses the fixed 10-digit timestamp.
    ///
    /// Zero-padded values are [`CodecError::MalformedInput`]: they are not
    /// JSON numbers and the encoder never writes them.
    pub fn created_at(&self) -> Result<u64, CodecError> {
        let created_at = parse_digits(&self.text.as_bytes()[CREATED_AT_START..CREATED_AT_END])?;
        if !nson_timestamp_fits(created_at) {
            return Err(CodecError::MalformedInput);
        }
        Ok(created_at)
    }

    fn layout(&self) -> Result<&Layout, CodecError> {
        self.layout
            .get_or_init(|| parse_layout(self.text.as_bytes()))
            .as_ref()
            .map_err(Clone::clone)
    }

    fn string(&self, range: &Range<usize>) -> Result<Cow<'a, str>, CodecError> {
        let interior = self.text.get(range.clone()).ok_or(CodecError::MalformedInput)?;
        unescape(interior).ok_or(CodecError::MalformedInput)
    }

    pub fn kind(&self) -> Result<u64, CodecError> {
        Ok(self.layout()?.kind)
    }

    /// The content, borrowed from the text unless it contains escapes.
    pub fn content(&self) -> Result<Cow<'a, str>, CodecError> {
        let layout = self.layout()?;
        self.string(&layout.content)
    }

    pub fn tag_count(&self) -> Result<usize, CodecError> {
        Ok(self.layout()?.tags.len())
    }

    /// Decodes the tag at `index`, or `None` past the last tag.
    pub fn tag(&self, index: usize) -> Result<Option<Tag>, CodecError> {
        let layout = self.layout()?;
        layout
            .tags
            .get(index)
            .map(|items| self.decode_tag(items))
            .transpose()
    }

    pub fn tags(&self) -> Result<Vec<Tag>, CodecError> {
        let layout = self.layout()?;
        layout.tags.iter().map(|items| self.decode_tag(items)).collect()
    }

    fn decode_tag(&self, items: &[Range<usize>]) -> Result<Tag, CodecError> {
        items
            .iter()
            .map(|range| self.string(range).map(Cow::into_owned))
            .collect::<Result<Vec<_>, _>>()
            .map(Tag)
    }

    /// Decodes every field into an owned [`Event`].
    pub fn to_event(&self) -> Result<Event, CodecError> {
        Ok(Event {
            id: self.id()?,
            pubkey: self.pubkey()?,
            sig: self.sig()?,
            created_at: self.created_at()?,
            kind: self.kind()?,
            content: self.content()?.into_owned(),
            tags: self.tags()?,
        })
    }
}

/// Decodes NSON text into an [`Event`].
///
/// [`CodecError::NotNson`] means the text does not carry the NSON prefix and
/// should go through a general JSON decode. Any inconsistency after the
/// prefix is [`CodecError::MalformedInput`].
pub fn decode(text: &str) -> Result<Event, CodecError> {
    NsonView::new(text)?.to_event()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nson::encode;

    fn sample() -> Event {
        Event {
            id: [0x11; 32],
            pubkey: [0x22; 32],
            sig: [0x33; 64],
            created_at: 1683660344,
            kind: 30023,
            content: "hello\n\"hello\"".into(),
            tags: vec![Tag::from(["e", "abc", "reply"]), Tag::from(["p", "", "wss://relay"])],
        }
    }

    #[test]
    fn layout_is_parsed_once() {
        let text = encode(&sample()).unwrap();
        let view = NsonView::new(&text).unwrap();
        assert!(view.layout.get().is_none());
        assert_eq!(view.id().unwrap(), [0x11; 32]);
        assert_eq!(view.created_at().unwrap(), 1683660344);
        assert!(view.layout.get().is_none());

        assert_eq!(view.kind().unwrap(), 30023);
        let first = view.layout.get().unwrap() as *const _;
        assert_eq!(view.tag_count().unwrap(), 2);
        assert_eq!(view.layout.get().unwrap() as *const _, first);
    }

    #[test]
    fn content_borrows_when_unescaped() {
        let mut event = sample();
        event.content = "plain".into();
        let text = encode(&event).unwrap();
        let view = NsonView::new(&text).unwrap();
        assert!(matches!(view.content().unwrap(), Cow::Borrowed("plain")));
    }

    #[test]
    fn single_tag_access() {
        let text = encode(&sample()).unwrap();
        let view = NsonView::new(&text).unwrap();
        assert_eq!(view.tag(1).unwrap(), Some(Tag::from(["p", "", "wss://relay"])));
        assert_eq!(view.tag(2).unwrap(), None);
    }

    #[test]
    fn rejects_missing_marker() {
        let text = encode(&sample()).unwrap().replacen("\"nson\"", "\"nsom\"", 1);
        assert_eq!(decode(&text).unwrap_err(), CodecError::NotNson);
    }

    #[test]
    fn rejects_short_text() {
        assert_eq!(decode("{}").unwrap_err(), CodecError::NotNson);
        assert_eq!(decode("").unwrap_err(), CodecError::NotNson);
    }

    #[test]
    fn rejects_descriptor_pointing_past_end() {
        let text = encode(&sample()).unwrap();
        // Content length 0x0010 -> 0x0fff.
        let forged = text.replacen("0500100203", "050fff0203", 1);
        assert_ne!(forged, text);
        assert_eq!(decode(&forged).unwrap_err(), CodecError::MalformedInput);
    }

    #[test]
    fn rejects_misplaced_separator() {
        let text = encode(&sample()).unwrap();
        let forged = text.replacen(r#","content":"#, r#",'content':"#, 1);
        assert_eq!(decode(&forged).unwrap_err(), CodecError::MalformedInput);
    }

    #[test]
    fn rejects_trailing_text() {
        let text = encode(&sample()).unwrap() + " ";
        assert_eq!(decode(&text).unwrap_err(), CodecError::MalformedInput);
    }

    #[test]
    fn rejects_bad_timestamp_digits() {
        let text = encode(&sample()).unwrap().replacen("1683660344", "16836603x4", 1);
        let view = NsonView::new(&text).unwrap();
        assert_eq!(view.created_at().unwrap_err(), CodecError::MalformedInput);
    }

    #[test]
    fn rejects_zero_padded_timestamp() {
        let text = encode(&sample()).unwrap().replacen("1683660344", "0000000001", 1);
        let view = NsonView::new(&text).unwrap();
        assert_eq!(view.created_at().unwrap_err(), CodecError::MalformedInput);
        assert_eq!(decode(&text).unwrap_err(), CodecError::MalformedInput);
        // A general JSON reader refuses it as well.
        assert!(crate::canonical::from_json(&text).is_err());
    }

    #[test]
    fn errors_are_cached_too() {
        let text = encode(&sample()).unwrap() + "x";
        let view = NsonView::new(&text).unwrap();
        assert_eq!(view.kind().unwrap_err(), CodecError::MalformedInput);
        assert_eq!(view.tags().unwrap_err(), CodecError::MalformedInput);
        // Header fields stay readable.
        assert_eq!(view.pubkey().unwrap(), [0x22; 32]);
    }

    #[test]
    fn view_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NsonView<'static>>();
    }
}
