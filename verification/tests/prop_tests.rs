use proptest::prelude::*;
use serde_json::{Map, Value};

use themis_types::REQUIRED_FIELDS;
use themis_verification::{parse_claim, validate};

fn arb_json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        ".{0,16}".prop_map(Value::String),
    ]
}

proptest! {
    /// validate is true exactly when all four keys are present.
    #[test]
    fn validate_matches_key_presence(
        mask in 0u8..16,
        extra in prop::collection::btree_map("[a-z]{1,8}", arb_json_leaf(), 0..5),
        leaf in arb_json_leaf(),
    ) {
        let mut object: Map<String, Value> = extra
            .into_iter()
            .filter(|(k, _)| !REQUIRED_FIELDS.contains(&k.as_str()))
            .collect();
        for (i, key) in REQUIRED_FIELDS.iter().enumerate() {
            if mask & (1 << i) != 0 {
                object.insert((*key).to_string(), leaf.clone());
            }
        }
        prop_assert_eq!(validate(&Value::Object(object)), mask == 0b1111);
    }

    /// Non-object JSON never validates.
    #[test]
    fn non_objects_never_validate(leaf in arb_json_leaf()) {
        prop_assert!(!validate(&leaf));
    }

    /// parse_claim is total over arbitrary text.
    #[test]
    fn parse_claim_never_panics(text in ".{0,256}") {
        let _ = parse_claim(&text);
    }
}
