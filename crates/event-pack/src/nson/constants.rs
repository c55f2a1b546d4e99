//! Fixed offsets and literals of the NSON shape.
//!
//! ```text
//! {"id":"<64 hex>","pubkey":"<64 hex>","sig":"<128 hex>","created_at":<10 digits>,"nson":"<hex>","kind":...
//! 0      7         71          83        147      156       284              299         309        318
//! ```

pub const ID_PREFIX: &[u8] = br#"{"id":""#;
pub const PUBKEY_PREFIX: &[u8] = br#"","pubkey":""#;
pub const SIG_PREFIX: &[u8] = br#"","sig":""#;
pub const CREATED_AT_PREFIX: &[u8] = br#"","created_at":"#;
pub const NSON_PREFIX: &[u8] = br#","nson":""#;

pub const KIND_PREFIX: &[u8] = br#"","kind":"#;
pub const CONTENT_PREFIX: &[u8] = br#","content":""#;
pub const TAGS_PREFIX: &[u8] = br#"","tags":"#;

pub const ID_START: usize = 7;
pub const ID_END: usize = ID_START + 64;
pub const PUBKEY_START: usize = ID_END + 12;
pub const PUBKEY_END: usize = PUBKEY_START + 64;
pub const SIG_START: usize = PUBKEY_END + 9;
pub const SIG_END: usize = SIG_START + 128;
pub const CREATED_AT_START: usize = SIG_END + 15;
pub const CREATED_AT_END: usize = CREATED_AT_START + 10;
/// Offset of the literal `nson` key.
pub const MARKER_START: usize = CREATED_AT_END + 2;
/// Offset of the two hex characters holding the descriptor size.
pub const SIZE_START: usize = CREATED_AT_END + 9;
pub const DESCRIPTORS_START: usize = SIZE_START + 2;

/// Every literal of the fixed prefix, paired with its offset.
pub const PREFIX_LITERALS: [(usize, &[u8]); 5] = [
    (0, ID_PREFIX),
    (ID_END, PUBKEY_PREFIX),
    (PUBKEY_END, SIG_PREFIX),
    (SIG_END, CREATED_AT_PREFIX),
    (CREATED_AT_END, NSON_PREFIX),
];
