//! Frame splitting, decoding, and encoding for the tnetstring wire format.
//!
//! Decoding and encoding are pure functions over their inputs; there is no
//! shared state and no I/O, so they are safe to call concurrently without
//! coordination.

pub mod decode;
pub mod encode;
pub mod frame;

pub use decode::decode;
pub use encode::encode;
pub use frame::{parse_frame, write_frame, Frame};

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::model::{Dict, Value};

    /// Encodes, decodes back, and checks the value survived unchanged with
    /// no remainder.
    fn assert_roundtrip(value: Value<'_>) {
        let bytes = encode(&value).unwrap();
        let (decoded, remainder) = decode(&bytes).unwrap();
        assert!(remainder.is_empty(), "remainder after {bytes:?}");
        assert_eq!(decoded, value, "wire form {bytes:?}");
    }

    #[test]
    fn test_roundtrip_scalars() {
        assert_roundtrip(Value::Null);
        assert_roundtrip(Value::Bool(true));
        assert_roundtrip(Value::Bool(false));
        for v in [0i64, 1, -1, 42, -12345, i64::MAX, i64::MIN] {
            assert_roundtrip(Value::Int(v));
        }
        for v in [0.0f64, 3.5, -3.14, -0.14, -42.0, f64::INFINITY, f64::NEG_INFINITY] {
            assert_roundtrip(Value::Float(v));
        }
    }

    #[test]
    fn test_roundtrip_strings() {
        assert_roundtrip(Value::from(""));
        assert_roundtrip(Value::from("hello world"));
        assert_roundtrip(Value::from("\u{3c0} = \u{1f600}"));
        assert_roundtrip(Value::Str(Cow::Owned(vec![0u8, 1, 2, 0xfe, 0xff])));
    }

    #[test]
    fn test_roundtrip_lists() {
        assert_roundtrip(Value::List(Vec::new()));
        assert_roundtrip(Value::List(vec![
            Value::Int(12345),
            Value::from("xxxxx"),
            Value::Null,
        ]));

        let mut nested = Value::from("hello-there");
        for _ in 0..49 {
            nested = Value::List(vec![nested]);
        }
        assert_roundtrip(nested);
    }

    #[test]
    fn test_roundtrip_dicts() {
        assert_roundtrip(Value::Dict(Dict::new()));

        let mut inner = Dict::new();
        inner.insert(Cow::Borrowed(&b"world"[..]), Value::Int(42));
        let mut dict = Dict::new();
        dict.insert(
            Cow::Borrowed(&b"hello"[..]),
            Value::List(vec![Value::Int(12345678901), Value::from("this")]),
        );
        dict.insert(Cow::Borrowed(&b"nested"[..]), Value::Dict(inner));
        dict.insert(Cow::Borrowed(&b"null"[..]), Value::Null);
        assert_roundtrip(Value::Dict(dict));
    }
}

#[cfg(test)]
mod proptests {
    use std::borrow::Cow;

    use proptest::prelude::*;

    use super::*;
    use crate::model::Value;

    fn arb_value() -> impl Strategy<Value = Value<'static>> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            any::<f64>()
                .prop_filter("NaN does not round-trip", |v| !v.is_nan())
                .prop_map(Value::Float),
            prop::collection::vec(any::<u8>(), 0..64)
                .prop_map(|bytes| Value::Str(Cow::Owned(bytes))),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
                prop::collection::vec((prop::collection::vec(any::<u8>(), 0..16), inner), 0..8)
                    .prop_map(|pairs| {
                        Value::Dict(
                            pairs
                                .into_iter()
                                .map(|(k, v)| (Cow::Owned(k), v))
                                .collect(),
                        )
                    }),
            ]
        })
    }

    proptest! {
        #[test]
        fn roundtrip_preserves_value(value in arb_value()) {
            let bytes = encode(&value).unwrap();
            let (decoded, remainder) = decode(&bytes).unwrap();
            prop_assert!(remainder.is_empty());
            prop_assert_eq!(decoded.into_owned(), value);
        }

        #[test]
        fn decode_of_concatenated_frames_consumes_one(
            first in arb_value(),
            second in arb_value(),
        ) {
            let mut bytes = encode(&first).unwrap();
            let second_bytes = encode(&second).unwrap();
            bytes.extend_from_slice(&second_bytes);

            let (decoded, remainder) = decode(&bytes).unwrap();
            prop_assert_eq!(decoded.into_owned(), first);
            prop_assert_eq!(remainder, &second_bytes[..]);
        }

        #[test]
        fn decode_of_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = decode(&bytes);
        }
    }
}
