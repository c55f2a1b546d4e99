//! Event record model shared by every codec.

use serde::{Deserialize, Serialize};

/// An ordered list of strings attached to an event.
///
/// The first item conventionally names the tag (`e`, `p`, `t`, ...) but the
/// codecs never look inside; items are carried verbatim and in order.
///
/// ```
/// use event_pack::Tag;
///
/// let tag = Tag::from(["t", "news"]);
/// assert_eq!(tag.len(), 2);
/// assert_eq!(tag.get(1), Some("news"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl From<Vec<String>> for Tag {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl<const N: usize> From<[&str; N]> for Tag {
    fn from(items: [&str; N]) -> Self {
        Self(items.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for Tag {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A signed protocol event with its fixed-width fields held as raw bytes.
///
/// Serializes to and from the canonical JSON shape:
///
/// ```json
/// {
///   "id": "<64 hex>",
///   "pubkey": "<64 hex>",
///   "created_at": 1688505641,
///   "kind": 1,
///   "tags": [["t", "news"]],
///   "content": "hello",
///   "sig": "<128 hex>"
/// }
/// ```
///
/// Hex is always written lowercase. Unknown keys are ignored on input, which
/// lets a plain JSON reader accept NSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    #[serde(with = "hex_bytes")]
    pub id: [u8; 32],
    #[serde(with = "hex_bytes")]
    pub pubkey: [u8; 32],
    pub created_at: u64,
    pub kind: u64,
    pub tags: Vec<Tag>,
    pub content: String,
    #[serde(with = "hex_bytes")]
    pub sig: [u8; 64],
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: [0; 32],
            pubkey: [0; 32],
            created_at: 0,
            kind: 0,
            tags: Vec::new(),
            content: String::new(),
            sig: [0; 64],
        }
    }
}

impl Event {
    pub fn id_hex(&self) -> String {
        hex::encode(self.id)
    }

    pub fn pubkey_hex(&self) -> String {
        hex::encode(self.pubkey)
    }

    pub fn sig_hex(&self) -> String {
        hex::encode(self.sig)
    }
}

/// Fixed-width byte arrays as lowercase hex strings.
mod hex_bytes {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer, const N: usize>(
        bytes: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        let mut out = [0u8; N];
        hex::decode_to_slice(s.as_bytes(), &mut out)
            .map_err(|_| D::Error::custom(format_args!("expected {} hex characters", N * 2)))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_conversions_preserve_order() {
        let from_array = Tag::from(["e", "abc", "reply"]);
        let from_iter: Tag = vec!["e", "abc", "reply"].into_iter().collect();
        assert_eq!(from_array, from_iter);
        assert_eq!(from_array.items(), &["e", "abc", "reply"]);
        assert_eq!(from_array.get(3), None);
    }

    #[test]
    fn hex_accessors_are_lowercase() {
        let event = Event {
            id: [0xab; 32],
            pubkey: [0xcd; 32],
            sig: [0xef; 64],
            ..Event::default()
        };
        assert_eq!(event.id_hex(), "ab".repeat(32));
        assert_eq!(event.pubkey_hex(), "cd".repeat(32));
        assert_eq!(event.sig_hex(), "ef".repeat(64));
    }

    #[test]
    fn deserialize_rejects_short_id() {
        let json = format!(
            r#"{{"id":"abcd","pubkey":"{}","created_at":1,"kind":1,"tags":[],"content":"","sig":"{}"}}"#,
            "00".repeat(32),
            "00".repeat(64)
        );
        assert!(serde_json::from_str::<Event>(&json).is_err());
    }

    #[test]
    fn deserialize_normalizes_uppercase_hex() {
        let json = format!(
            r#"{{"id":"{}","pubkey":"{}","created_at":1,"kind":1,"tags":[["t","x"]],"content":"","sig":"{}"}}"#,
            "AB".repeat(32),
            "00".repeat(32),
            "00".repeat(64)
        );
        let event: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event.id_hex(), "ab".repeat(32));
        assert_eq!(event.tags, vec![Tag::from(["t", "x"])]);
    }
}
