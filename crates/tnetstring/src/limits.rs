//! Hardening limits for handling untrusted input.
//!
//! The wire format caps the declared length of a single frame but imposes no
//! nesting limit; the depth ceiling here bounds stack usage on adversarial
//! input and applies symmetrically to decoding and encoding.

/// Maximum declared payload length of a single frame (format-defined).
pub const MAX_DECLARED_LENGTH: usize = 999_999_999;

/// Maximum number of digits in a length prefix (format-defined).
pub const MAX_LENGTH_DIGITS: usize = 9;

/// Maximum value nesting depth accepted by the decoder and encoder.
pub const MAX_DEPTH: usize = 128;
