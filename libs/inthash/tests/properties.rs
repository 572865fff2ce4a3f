//! Property tests for the text and JSON codecs.

use inthash::{equal, parse, parse_canonical, IntHash};
use proptest::prelude::*;

fn any_hash() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9a-f]{1,64}",
        ".+",
        "[a-z$]{1,16}",
    ]
}

fn any_int_hash() -> impl Strategy<Value = IntHash> {
    (any::<i64>(), prop_oneof![Just(String::new()), any_hash()])
        .prop_map(|(generation, hash)| IntHash::new(generation, hash))
}

proptest! {
    #[test]
    fn canonical_text_roundtrip(generation in any::<i64>(), hash in any_hash()) {
        let value = IntHash::new(generation, hash);
        let parsed = parse_canonical(&value.to_string()).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn empty_hash_encodes_as_bare_number(generation in any::<i64>()) {
        let value = IntHash::for_generation(generation);
        let json = serde_json::to_string(&value).unwrap();
        prop_assert_eq!(&json, &generation.to_string());

        let decoded: IntHash = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded.generation(), generation);
        prop_assert_eq!(decoded.hash(), "");
    }

    #[test]
    fn json_roundtrip(value in any_int_hash()) {
        let reachable = parse(&value).unwrap();
        let json = serde_json::to_vec(&reachable).unwrap();

        let decoded: IntHash = serde_json::from_slice(&json).unwrap();
        prop_assert!(equal(Some(&decoded), Some(&reachable)));

        let mut merged = IntHash::default();
        merged.merge_json(&json).unwrap();
        prop_assert!(equal(Some(&merged), Some(&reachable)));
    }

    #[test]
    fn reencode_is_stable(value in any_int_hash()) {
        let first = serde_json::to_vec(&value).unwrap();
        let decoded: IntHash = serde_json::from_slice(&first).unwrap();
        let second = serde_json::to_vec(&decoded).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn number_decode_preserves_hash(
        start in any::<i64>(),
        hash in any_hash(),
        generation in any::<i64>(),
    ) {
        let mut value = IntHash::new(start, hash.clone());
        value.merge_json(generation.to_string().as_bytes()).unwrap();
        prop_assert_eq!(value, IntHash::new(generation, hash));
    }

    #[test]
    fn null_decode_is_a_no_op(value in any_int_hash()) {
        let mut target = value.clone();
        target.merge_json(b"null").unwrap();
        prop_assert_eq!(target, value);
    }

    #[test]
    fn text_without_separator_is_rejected(s in "[^$]+") {
        prop_assert!(parse_canonical(&s).unwrap_err().is_missing_segment());
    }
}
