//! Shared fixtures for the codec matrices.
#![allow(dead_code)]

use event_pack::{Event, Tag};

/// NSON documents pinned byte for byte. Encoding the event they describe
/// must reproduce them exactly.
// Vectors written with non-JSON string escapes are left out: no JSON reader
// accepts them, so they cannot pin an encoding.
pub const NSON_VECTORS: [&str; 2] = [
    r#"{"id":"ae1fc7154296569d87ca4663f6bdf448c217d1590d28c85d158557b8b43b4d69","pubkey":"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798","sig":"94e10947814b1ebe38af42300ecd90c7642763896c4f69506ae97bfdf54eec3c0c21df96b7d95daa74ff3d414b1d758ee95fc258125deebc31df0c6ba9396a51","created_at":1683660344,"nson":"1405000b0203000100400005040001004000000014","kind":30023,"content":"hello hello","tags":[["e","b6de44a9dd47d1c000f795ea0453046914f44ba7d5e369608b04867a575ea83e","reply"],["p","c26f7b252cea77a5b94f42b1a4771021be07d4df766407e47738605f7e3ab774","","wss://relay.damus.io"]]}"#,
    r#"{"id":"ae1fc7154296569d87ca4663f6bdf448c217d1590d28c85d158557b8b43b4d69","pubkey":"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798","sig":"94e10947814b1ebe38af42300ecd90c7642763896c4f69506ae97bfdf54eec3c0c21df96b7d95daa74ff3d414b1d758ee95fc258125deebc31df0c6ba9396a51","created_at":1683660344,"nson":"140500100203000100400005040001004000000014","kind":30023,"content":"hello\n\"hello\"","tags":[["e","b6de44a9dd47d1c000f795ea0453046914f44ba7d5e369608b04867a575ea83e","reply"],["p","c26f7b252cea77a5b94f42b1a4771021be07d4df766407e47738605f7e3ab774","","wss://relay.damus.io"]]}"#,
];

/// Binary encodings of the events in [`NSON_VECTORS`], base64 (standard
/// alphabet, padded).
pub const BINARY_VECTORS_BASE64: [&str; 2] = [
    "rh/HFUKWVp2HykZj9r30SMIX0VkNKMhdFYVXuLQ7TWl5vmZ++dy7rFWgYpXOhwsHApv82y3OKNlZ8oFbFvgXmJThCUeBSx6+OK9CMA7NkMdkJ2OJbE9pUGrpe/31Tuw8DCHflrfZXap0/z1BSx11julfwlgSXe68Md8Ma6k5alFkWp44dUcAC2hlbGxvIGhlbGxvAAIDAAFlAEBiNmRlNDRhOWRkNDdkMWMwMDBmNzk1ZWEwNDUzMDQ2OTE0ZjQ0YmE3ZDVlMzY5NjA4YjA0ODY3YTU3NWVhODNlAAVyZXBseQQAAXAAQGMyNmY3YjI1MmNlYTc3YTViOTRmNDJiMWE0NzcxMDIxYmUwN2Q0ZGY3NjY0MDdlNDc3Mzg2MDVmN2UzYWI3NzQAAAAUd3NzOi8vcmVsYXkuZGFtdXMuaW8=",
    "rh/HFUKWVp2HykZj9r30SMIX0VkNKMhdFYVXuLQ7TWl5vmZ++dy7rFWgYpXOhwsHApv82y3OKNlZ8oFbFvgXmJThCUeBSx6+OK9CMA7NkMdkJ2OJbE9pUGrpe/31Tuw8DCHflrfZXap0/z1BSx11julfwlgSXe68Md8Ma6k5alFkWp44dUcADWhlbGxvCiJoZWxsbyIAAgMAAWUAQGI2ZGU0NGE5ZGQ0N2QxYzAwMGY3OTVlYTA0NTMwNDY5MTRmNDRiYTdkNWUzNjk2MDhiMDQ4NjdhNTc1ZWE4M2UABXJlcGx5BAABcABAYzI2ZjdiMjUyY2VhNzdhNWI5NGY0MmIxYTQ3NzEwMjFiZTA3ZDRkZjc2NjQwN2U0NzczODYwNWY3ZTNhYjc3NAAAABR3c3M6Ly9yZWxheS5kYW11cy5pbw==",
];

/// A small note with a couple of tags and characters that need escaping.
pub fn sample_event() -> Event {
    Event {
        id: [0x5a; 32],
        pubkey: [0x79; 32],
        sig: [0x94; 64],
        created_at: 1688505641,
        kind: 1,
        content: "gm \"nostr\"\n\t\u{1}日本語 🤙".into(),
        tags: vec![
            Tag::from(["e", "b6de44a9dd47d1c000f795ea0453046914f44ba7d5e369608b04867a575ea83e", "reply"]),
            Tag::from(["p", "c26f7b252cea77a5b94f42b1a4771021be07d4df766407e47738605f7e3ab774", "", "wss://relay.damus.io"]),
            Tag::from(["t"]),
            Tag::default(),
        ],
    }
}
