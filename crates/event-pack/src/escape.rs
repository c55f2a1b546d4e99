//! JSON string escaping for the NSON codec.
//!
//! NSON records the byte length of every escaped string interior, so the
//! encoder needs the escaped form before it writes anything and the decoder
//! needs to turn a sliced interior back into text.

use std::borrow::Cow;

const HEX: &[u8; 16] = b"0123456789abcdef";

#[inline]
fn short_escape(b: u8) -> Option<&'static str> {
    match b {
        b'"' => Some("\\\""),
        b'\\' => Some("\\\\"),
        0x08 => Some("\\b"),
        0x0c => Some("\\f"),
        b'\n' => Some("\\n"),
        b'\r' => Some("\\r"),
        b'\t' => Some("\\t"),
        _ => None,
    }
}

#[inline]
fn needs_escape(b: u8) -> bool {
    b < 0x20 || b == b'"' || b == b'\\'
}

/// Byte length of the escaped interior of `s`, computed without allocating.
pub fn escaped_len(s: &str) -> usize {
    s.bytes()
        .map(|b| match b {
            _ if short_escape(b).is_some() => 2,
            0x00..=0x1f => 6,
            _ => 1,
        })
        .sum()
}

/// Appends the JSON-escaped interior of `s` (no surrounding quotes) to `out`.
///
/// Escapes `"`, `\` and control characters below U+0020; the five controls
/// with a short form use it, the rest use `\u00XX`. Everything else,
/// including non-ASCII text, is copied as is.
///
/// ```
/// let mut out = String::new();
/// event_pack::escape::write_escaped(&mut out, "say \"hi\"\n\u{1}");
/// assert_eq!(out, r#"say \"hi\"\n\u0001"#);
/// ```
pub fn write_escaped(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut last = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if !needs_escape(b) {
            continue;
        }
        // Escapable bytes are ASCII, so `i` is always a char boundary.
        out.push_str(&s[last..i]);
        match short_escape(b) {
            Some(esc) => out.push_str(esc),
            None => {
                out.push_str("\\u00");
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0xf) as usize] as char);
            }
        }
        last = i + 1;
    }
    out.push_str(&s[last..]);
}

/// Returns the escaped interior of `s` as a new string.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(escaped_len(s));
    write_escaped(&mut out, s);
    out
}

/// Decodes a JSON string interior (the text between the quotes).
///
/// Borrows `interior` when it holds no escapes. Returns `None` when it is not
/// a valid JSON string body, e.g. a bare `"` or raw control character.
pub fn unescape(interior: &str) -> Option<Cow<'_, str>> {
    let bytes = interior.as_bytes();
    if !bytes.iter().any(|&b| needs_escape(b)) {
        return Some(Cow::Borrowed(interior));
    }
    let mut quoted = String::with_capacity(interior.len() + 2);
    quoted.push('"');
    quoted.push_str(interior);
    quoted.push('"');
    serde_json::from_str::<String>(&quoted).ok().map(Cow::Owned)
}
