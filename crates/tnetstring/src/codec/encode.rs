//! Value encoding for the tnetstring wire format.

use crate::codec::frame::write_frame;
use crate::error::EncodeError;
use crate::limits::MAX_DEPTH;
use crate::model::{Tag, Value};

/// Encodes a value into a complete frame.
///
/// Composite payloads are built bottom-up: each child is encoded into its
/// parent's payload buffer, and the parent is framed with the exact byte
/// count of that buffer.
///
/// # Example
///
/// ```
/// use tnetstring::{encode, Value};
///
/// let bytes = encode(&Value::Int(12345)).unwrap();
/// assert_eq!(bytes, b"5:12345#");
/// ```
///
/// # Errors
///
/// Fails on NaN floats and on values nested deeper than [`MAX_DEPTH`];
/// nothing is emitted on failure.
pub fn encode(value: &Value<'_>) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    encode_at_depth(&mut out, value, 0)?;
    Ok(out)
}

fn encode_at_depth(
    out: &mut Vec<u8>,
    value: &Value<'_>,
    depth: usize,
) -> Result<(), EncodeError> {
    if depth >= MAX_DEPTH {
        return Err(EncodeError::DepthLimitExceeded { max: MAX_DEPTH });
    }

    match value {
        Value::Null => write_frame(out, b"", Tag::Null),
        Value::Bool(true) => write_frame(out, b"true", Tag::Bool),
        Value::Bool(false) => write_frame(out, b"false", Tag::Bool),
        Value::Int(v) => {
            let mut buf = [0u8; 20];
            let start = render_i64(*v, &mut buf);
            write_frame(out, &buf[start..], Tag::Int);
        }
        Value::Float(v) => {
            if v.is_nan() {
                return Err(EncodeError::FloatIsNan);
            }
            // {:?} keeps the fraction marker, so -42.0 frames as "-42.0"
            let text = format!("{v:?}");
            write_frame(out, text.as_bytes(), Tag::Float);
        }
        Value::Str(bytes) => write_frame(out, bytes, Tag::Str),
        Value::List(items) => {
            let mut contents = Vec::new();
            for item in items {
                encode_at_depth(&mut contents, item, depth + 1)?;
            }
            write_frame(out, &contents, Tag::List);
        }
        Value::Dict(dict) => {
            let mut contents = Vec::new();
            for (key, value) in dict {
                write_frame(&mut contents, key, Tag::Str);
                encode_at_depth(&mut contents, value, depth + 1)?;
            }
            write_frame(out, &contents, Tag::Dict);
        }
    }
    Ok(())
}

/// Renders the decimal text of `v` into the tail of `buf`, returning the
/// offset of the first digit (or sign).
fn render_i64(v: i64, buf: &mut [u8; 20]) -> usize {
    // Work in unsigned space so i64::MIN needs no special case
    let negative = v < 0;
    let mut n = v.unsigned_abs();
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    if negative {
        i -= 1;
        buf[i] = b'-';
    }
    i
}
