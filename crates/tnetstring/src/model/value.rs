//! Value types for tnetstring documents.
//!
//! Values are a closed union over the seven wire kinds. Decoded strings
//! borrow from the input buffer via `Cow`; use [`Value::into_owned`] to
//! detach a value from the buffer it was decoded from.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Wire type tags (one byte each).
///
/// The discriminant of each variant is its on-wire byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Int = b'#',
    Float = b'^',
    Str = b',',
    List = b']',
    Dict = b'}',
    Null = b'~',
    Bool = b'!',
}

impl Tag {
    /// Creates a Tag from its wire byte.
    pub fn from_u8(v: u8) -> Option<Tag> {
        match v {
            b'#' => Some(Tag::Int),
            b'^' => Some(Tag::Float),
            b',' => Some(Tag::Str),
            b']' => Some(Tag::List),
            b'}' => Some(Tag::Dict),
            b'~' => Some(Tag::Null),
            b'!' => Some(Tag::Bool),
            _ => None,
        }
    }

    /// Returns the wire byte for this tag.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Insertion-ordered dictionary with byte-string keys.
///
/// Keys are string-typed by construction, so a non-string key cannot be
/// encoded. Inserting an existing key replaces its value while keeping the
/// first occurrence's position, which is also the decoder's behavior for
/// repeated keys on the wire.
pub type Dict<'a> = IndexMap<Cow<'a, [u8]>, Value<'a>>;

/// A decoded or to-be-encoded tnetstring value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Null (empty payload).
    Null,

    /// Boolean.
    Bool(bool),

    /// 64-bit signed integer.
    ///
    /// Deviation from the format's big-integer friendliness: payloads whose
    /// magnitude does not fit an `i64` fail to decode rather than being
    /// silently truncated.
    Int(i64),

    /// 64-bit IEEE 754 float. NaN cannot be encoded.
    Float(f64),

    /// Opaque byte string. Not guaranteed to be valid UTF-8; the frame
    /// length counts bytes, never characters.
    Str(Cow<'a, [u8]>),

    /// Ordered sequence of values.
    List(Vec<Value<'a>>),

    /// Insertion-ordered dictionary with string keys.
    Dict(Dict<'a>),
}

impl<'a> Value<'a> {
    /// Returns the wire tag for this value.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Bool(_) => Tag::Bool,
            Value::Int(_) => Tag::Int,
            Value::Float(_) => Tag::Float,
            Value::Str(_) => Tag::Str,
            Value::List(_) => Tag::List,
            Value::Dict(_) => Tag::Dict,
        }
    }

    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string bytes if this is a `Str`.
    pub fn as_str(&self) -> Option<&[u8]> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value<'a>]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a `Dict`.
    pub fn as_dict(&self) -> Option<&Dict<'a>> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// Detaches the value from the buffer it was decoded from, cloning any
    /// borrowed string payloads.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(v) => Value::Bool(v),
            Value::Int(v) => Value::Int(v),
            Value::Float(v) => Value::Float(v),
            Value::Str(s) => Value::Str(Cow::Owned(s.into_owned())),
            Value::List(items) => {
                Value::List(items.into_iter().map(Value::into_owned).collect())
            }
            Value::Dict(dict) => Value::Dict(
                dict.into_iter()
                    .map(|(k, v)| (Cow::Owned(k.into_owned()), v.into_owned()))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(Cow::Borrowed(s.as_bytes()))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Str(Cow::Owned(s.into_bytes()))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Value::Str(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Value<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Str(Cow::Owned(bytes))
    }
}

impl<'a> From<Vec<Value<'a>>> for Value<'a> {
    fn from(items: Vec<Value<'a>>) -> Self {
        Value::List(items)
    }
}

impl<'a> From<Dict<'a>> for Value<'a> {
    fn from(dict: Dict<'a>) -> Self {
        Value::Dict(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_u8() {
        for tag in [Tag::Int, Tag::Float, Tag::Str, Tag::List, Tag::Dict, Tag::Null, Tag::Bool] {
            assert_eq!(Tag::from_u8(tag.as_u8()), Some(tag));
        }
        assert_eq!(Tag::from_u8(b')'), None);
        assert_eq!(Tag::from_u8(b'0'), None);
        assert_eq!(Tag::from_u8(b':'), None);
    }

    #[test]
    fn test_value_tag() {
        assert_eq!(Value::Null.tag(), Tag::Null);
        assert_eq!(Value::Bool(true).tag(), Tag::Bool);
        assert_eq!(Value::Int(0).tag(), Tag::Int);
        assert_eq!(Value::Float(0.0).tag(), Tag::Float);
        assert_eq!(Value::from("x").tag(), Tag::Str);
        assert_eq!(Value::List(Vec::new()).tag(), Tag::List);
        assert_eq!(Value::Dict(Dict::new()).tag(), Tag::Dict);
    }

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(false).is_null());
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::from("hi").as_str(), Some(&b"hi"[..]));
        assert_eq!(Value::Int(42).as_str(), None);
        assert_eq!(Value::from("hi").as_int(), None);
    }

    #[test]
    fn test_dict_repeated_insert_keeps_position() {
        let mut dict = Dict::new();
        dict.insert(Cow::Borrowed(&b"a"[..]), Value::Int(1));
        dict.insert(Cow::Borrowed(&b"b"[..]), Value::Int(2));
        dict.insert(Cow::Borrowed(&b"a"[..]), Value::Int(3));

        let entries: Vec<_> = dict.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0.as_ref(), b"a");
        assert_eq!(entries[0].1, &Value::Int(3));
        assert_eq!(entries[1].0.as_ref(), b"b");
    }

    #[test]
    fn test_into_owned_detaches_borrows() {
        let buffer = b"hello".to_vec();
        let value = Value::List(vec![
            Value::Str(Cow::Borrowed(&buffer[..])),
            Value::Int(1),
        ]);
        let owned = value.into_owned();
        drop(buffer);
        assert_eq!(
            owned,
            Value::List(vec![Value::Str(Cow::Owned(b"hello".to_vec())), Value::Int(1)])
        );
    }
}
