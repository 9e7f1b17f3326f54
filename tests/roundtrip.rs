use bytes::Bytes;
use num_bigint::BigInt;
use proptest::prelude::*;
use rbencode::{decode, encode, Value};

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<i128>().prop_map(|i| Value::Integer(BigInt::from(i))),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Value::from),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::List),
            prop::collection::vec((prop::collection::vec(any::<u8>(), 0..8), inner), 0..8)
                .prop_map(|entries| Value::dict(entries.into_iter().map(|(k, v)| (Bytes::from(k), v)))),
        ]
    })
}

proptest! {
    #[test]
    fn roundtrip_any_value(value in value_strategy()) {
        let encoded = encode(&value);
        prop_assert_eq!(encoded.len(), value.encoded_len());
        prop_assert_eq!(decode(&encoded).unwrap(), value);
    }

    #[test]
    fn decoded_input_reencodes_identically(value in value_strategy()) {
        let encoded = encode(&value);
        let decoded = decode(&encoded).unwrap();
        prop_assert_eq!(encode(&decoded), encoded);
    }

    #[test]
    fn decode_never_panics(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&input);
    }

    #[test]
    fn decode_never_panics_on_token_soup(input in "[ilde0-9:-]{0,64}") {
        if let Ok(value) = decode(input.as_bytes()) {
            prop_assert_eq!(encode(&value), input.as_bytes());
        }
    }
}
