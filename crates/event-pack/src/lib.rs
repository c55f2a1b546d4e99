//! event-pack - compact encodings of signed protocol events.
//!
//! An [`Event`] normally travels as JSON. This crate adds two encodings for
//! hot paths:
//!
//! - [`binary`]: a packed big-endian layout with a fixed-offset header, for
//!   storage and fast header-only filtering.
//! - [`nson`]: JSON text with an extra `nson` key holding a descriptor table,
//!   so a positional reader can slice out fields without tokenizing while any
//!   other JSON reader still sees a normal event.
//!
//! Both codecs bound some fields more tightly than the event model does (see
//! [`limits`]). Encode errors mean "use [`canonical`] JSON instead"; the
//! `encode_or_canonical` helpers in each codec module do that for you.
//!
//! ```
//! use event_pack::{binary, nson, Event, Tag};
//!
//! let event = Event {
//!     created_at: 1688505641,
//!     kind: 1,
//!     content: "hello".into(),
//!     tags: vec![Tag::from(["t", "news"])],
//!     ..Event::default()
//! };
//!
//! let packed = binary::encode(&event).unwrap();
//! assert_eq!(binary::decode(&packed).unwrap(), event);
//!
//! let text = nson::encode(&event).unwrap();
//! assert_eq!(nson::decode(&text).unwrap(), event);
//! ```

pub mod binary;
pub mod canonical;
pub mod error;
pub mod escape;
mod event;
pub mod limits;
pub mod nson;

pub use error::{CodecError, Field};
pub use event::{Event, Tag};
pub use limits::is_eligible_for_binary;
