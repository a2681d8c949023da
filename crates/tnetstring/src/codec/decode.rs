//! Value decoding for the tnetstring wire format.

use std::borrow::Cow;

use crate::codec::frame::parse_frame;
use crate::error::DecodeError;
use crate::limits::MAX_DEPTH;
use crate::model::{Dict, Tag, Value};

/// Decodes one value from the front of `input` (zero-copy).
///
/// Returns the value together with the unconsumed trailing bytes, so a
/// caller can decode a sequence of concatenated frames by feeding the
/// remainder back in.
///
/// # Example
///
/// ```
/// use tnetstring::{decode, Value};
///
/// let (value, remainder) = decode(b"11:hello world,abc123").unwrap();
/// assert_eq!(value, Value::from("hello world"));
/// assert_eq!(remainder, b"abc123");
/// ```
///
/// # Errors
///
/// Fails on any malformed frame, payload that violates its tag's contract,
/// or nesting deeper than [`MAX_DEPTH`]; no partial value is returned.
pub fn decode(input: &[u8]) -> Result<(Value<'_>, &[u8]), DecodeError> {
    decode_at_depth(input, 0)
}

fn decode_at_depth(input: &[u8], depth: usize) -> Result<(Value<'_>, &[u8]), DecodeError> {
    if depth >= MAX_DEPTH {
        return Err(DecodeError::DepthLimitExceeded { max: MAX_DEPTH });
    }

    let frame = parse_frame(input)?;
    let value = match frame.tag {
        Tag::Int => Value::Int(decode_int(frame.payload)?),
        Tag::Float => Value::Float(decode_float(frame.payload)?),
        Tag::Str => Value::Str(Cow::Borrowed(frame.payload)),
        Tag::Null => {
            if !frame.payload.is_empty() {
                return Err(DecodeError::NonZeroNullPayload {
                    len: frame.payload.len(),
                });
            }
            Value::Null
        }
        Tag::Bool => Value::Bool(decode_bool(frame.payload)?),
        Tag::List => decode_list(frame.payload, depth)?,
        Tag::Dict => decode_dict(frame.payload, depth)?,
    };
    Ok((value, frame.remainder))
}

/// Parses an integer payload: optional leading `-`, then decimal digits.
///
/// Leading zeros are accepted; magnitudes outside `i64` are rejected.
fn decode_int(payload: &[u8]) -> Result<i64, DecodeError> {
    let digits = match payload.split_first() {
        Some((b'-', rest)) => rest,
        _ => payload,
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(DecodeError::InvalidInt);
    }
    // All-ASCII payload, from_utf8 cannot fail here
    std::str::from_utf8(payload)
        .map_err(|_| DecodeError::InvalidInt)?
        .parse::<i64>()
        .map_err(|_| DecodeError::InvalidInt)
}

/// Parses a float payload via standard float parsing.
fn decode_float(payload: &[u8]) -> Result<f64, DecodeError> {
    std::str::from_utf8(payload)
        .map_err(|_| DecodeError::InvalidFloat)?
        .parse::<f64>()
        .map_err(|_| DecodeError::InvalidFloat)
}

fn decode_bool(payload: &[u8]) -> Result<bool, DecodeError> {
    match payload {
        b"true" => Ok(true),
        b"false" => Ok(false),
        _ => Err(DecodeError::InvalidBool),
    }
}

/// Decodes a list payload by consuming element frames until exhausted.
fn decode_list(payload: &[u8], depth: usize) -> Result<Value<'_>, DecodeError> {
    let mut items = Vec::new();
    let mut rest = payload;
    while !rest.is_empty() {
        let (item, next) = decode_at_depth(rest, depth + 1)?;
        items.push(item);
        rest = next;
    }
    Ok(Value::List(items))
}

/// Decodes a dictionary payload by consuming key/value frame pairs.
///
/// Keys must be strings. A repeated key overwrites the earlier value while
/// keeping the first occurrence's position.
fn decode_dict(payload: &[u8], depth: usize) -> Result<Value<'_>, DecodeError> {
    let mut dict = Dict::new();
    let mut rest = payload;
    while !rest.is_empty() {
        let (key, after_key) = decode_at_depth(rest, depth + 1)?;
        let key = match key {
            Value::Str(key) => key,
            other => return Err(DecodeError::NonStringKey { found: other.tag() }),
        };
        if after_key.is_empty() {
            return Err(DecodeError::UnbalancedDict);
        }
        let (value, next) = decode_at_depth(after_key, depth + 1)?;
        dict.insert(key, value);
        rest = next;
    }
    Ok(Value::Dict(dict))
}
