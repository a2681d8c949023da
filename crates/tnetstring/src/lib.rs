//! Codec for the tagged netstring (tnetstring) wire format.
//!
//! A tnetstring is a self-describing, length-prefixed frame: `<byte-length>:
//! <payload><tag>`, where the one-byte tag selects among seven value kinds
//! (null, boolean, integer, float, byte string, list, dictionary) and list
//! and dictionary payloads are themselves sequences of complete frames,
//! nesting arbitrarily.
//!
//! # Quick Start
//!
//! ```rust
//! use tnetstring::{decode, encode, Value};
//!
//! let (value, remainder) = decode(b"5:12345#").unwrap();
//! assert_eq!(value, Value::Int(12345));
//! assert!(remainder.is_empty());
//!
//! let bytes = encode(&Value::List(vec![
//!     Value::from("cat"),
//!     Value::from(false),
//!     Value::from(123i64),
//! ]))
//! .unwrap();
//! assert_eq!(bytes, b"20:3:cat,5:false!3:123#]");
//! ```
//!
//! `decode` returns the unconsumed trailing bytes alongside the value, so a
//! sequence of concatenated frames is decoded by feeding the remainder back
//! in until it is empty.
//!
//! # Modules
//!
//! - [`model`]: the value union ([`Value`], [`Tag`], [`Dict`])
//! - [`codec`]: frame splitting, decoding, encoding
//! - [`error`]: error types and the coarse [`ErrorKind`] taxonomy
//! - [`limits`]: hardening limits for untrusted input
//!
//! # Security
//!
//! The decoder is designed to safely handle untrusted input:
//! - a frame's declared length is validated (1-9 digits, capped) before any
//!   slicing, and must match the payload byte count exactly
//! - nesting depth is bounded by [`limits::MAX_DEPTH`] on both decode and
//!   encode, so adversarial nesting cannot exhaust the stack
//! - malformed input is rejected with a typed error; no partial value is
//!   ever returned
//!
//! # Wire Format
//!
//! ```text
//! <declared-length>:<payload><tag>[<remainder>]
//! ```
//!
//! - `declared-length`: 1-9 ASCII decimal digits, no sign, at most
//!   999,999,999; always the **byte** count of the payload, never a
//!   character count
//! - `payload`: exactly `declared-length` raw bytes, no escaping
//! - `tag`: one byte from `# ^ , ] } ~ !`
//! - `remainder`: zero or more trailing bytes, possibly another frame
//!
//! String payloads are opaque bytes and need not be valid UTF-8. Decoded
//! strings borrow from the input buffer; use [`Value::into_owned`] to keep
//! a value past the buffer's lifetime.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used items at crate root
pub use codec::{decode, encode};
pub use error::{DecodeError, EncodeError, ErrorKind};
pub use model::{Dict, Tag, Value};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
