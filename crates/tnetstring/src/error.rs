//! Error types for tnetstring decoding and encoding.

use thiserror::Error;

use crate::model::Tag;

/// Coarse error classification, one entry per failure class in the format
/// contract. Callers that do not care about the precise variant can branch
/// on [`DecodeError::kind`] instead of matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing separator, missing tag byte, unparseable length prefix, or
    /// payload shorter than declared.
    MalformedFrame,
    /// Negative or oversized declared length.
    LengthOutOfRange,
    /// Tag byte outside the recognized set.
    InvalidTag,
    /// Payload content does not match the tag's contract.
    TypeMismatch,
    /// Nesting deeper than the configured ceiling.
    DepthLimit,
}

/// Error during decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("input is empty")]
    EmptyInput,

    #[error("no ':' separator after length prefix")]
    MissingSeparator,

    #[error("length prefix is not a run of decimal digits")]
    MalformedLength,

    #[error("declared length is negative")]
    NegativeLength,

    #[error("declared length exceeds maximum {max}")]
    LengthTooLarge { max: usize },

    #[error("payload shorter than declared: {declared} bytes expected but only {available} available")]
    PayloadTooShort { declared: usize, available: usize },

    #[error("no tag byte after payload")]
    MissingTag,

    #[error("unrecognized tag byte 0x{found:02x}")]
    UnrecognizedTag { found: u8 },

    #[error("integer payload is not the decimal text of an i64")]
    InvalidInt,

    #[error("float payload is not decimal float text")]
    InvalidFloat,

    #[error("null payload must be empty, found {len} bytes")]
    NonZeroNullPayload { len: usize },

    #[error("boolean payload must be exactly `true` or `false`")]
    InvalidBool,

    #[error("dictionary key must be a string, found {found:?}")]
    NonStringKey { found: Tag },

    #[error("dictionary payload ends after a key with no value")]
    UnbalancedDict,

    #[error("nesting depth exceeds maximum {max}")]
    DepthLimitExceeded { max: usize },
}

impl DecodeError {
    /// Returns the error class for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::EmptyInput
            | DecodeError::MissingSeparator
            | DecodeError::MalformedLength
            | DecodeError::PayloadTooShort { .. }
            | DecodeError::MissingTag => ErrorKind::MalformedFrame,
            DecodeError::NegativeLength | DecodeError::LengthTooLarge { .. } => {
                ErrorKind::LengthOutOfRange
            }
            DecodeError::UnrecognizedTag { .. } => ErrorKind::InvalidTag,
            DecodeError::InvalidInt
            | DecodeError::InvalidFloat
            | DecodeError::NonZeroNullPayload { .. }
            | DecodeError::InvalidBool
            | DecodeError::NonStringKey { .. }
            | DecodeError::UnbalancedDict => ErrorKind::TypeMismatch,
            DecodeError::DepthLimitExceeded { .. } => ErrorKind::DepthLimit,
        }
    }
}

/// Error during encoding.
///
/// The value model makes most of the dynamic failure modes unrepresentable:
/// `Value` is a closed union and dictionary keys are byte strings by type,
/// so only genuinely unencodable inputs remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("float value is NaN")]
    FloatIsNan,

    #[error("nesting depth exceeds maximum {max}")]
    DepthLimitExceeded { max: usize },
}
