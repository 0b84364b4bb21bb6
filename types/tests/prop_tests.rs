use proptest::prelude::*;
use serde_json::{Map, Value};

use themis_types::{ClaimDocument, Identity, REQUIRED_FIELDS};

fn object_with(keys: &[&str], extra: &[(String, String)]) -> Value {
    let mut map = Map::new();
    for key in keys {
        map.insert((*key).to_string(), Value::String(format!("{key}-value")));
    }
    for (k, v) in extra {
        map.entry(k.clone()).or_insert_with(|| Value::String(v.clone()));
    }
    Value::Object(map)
}

proptest! {
    /// from_json succeeds exactly when every required key is present.
    #[test]
    fn from_json_requires_every_field(
        mask in 0u8..16,
        extra in prop::collection::vec(("[a-z_]{1,10}", ".{0,16}"), 0..4),
    ) {
        let keys: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, k)| *k)
            .collect();
        let doc = ClaimDocument::from_json(&object_with(&keys, &extra));
        prop_assert_eq!(doc.is_some(), keys.len() == REQUIRED_FIELDS.len());
    }

    /// Extra keys never change the parsed fields.
    #[test]
    fn extra_keys_are_ignored(extra in prop::collection::vec(("x[a-z]{1,8}", ".{0,16}"), 0..6)) {
        let doc = ClaimDocument::from_json(&object_with(&REQUIRED_FIELDS, &extra)).unwrap();
        prop_assert_eq!(doc.address, "address-value");
        prop_assert_eq!(doc.signature, "signature-value");
    }

    /// Identity display has one comma per field boundary when values carry none.
    #[test]
    fn identity_display_joins_values(values in prop::collection::vec("[a-zA-Z0-9]{1,12}", 0..5)) {
        let mut identity = Identity::new();
        for (i, v) in values.iter().enumerate() {
            identity.push(format!("f{i}"), v.clone());
        }
        prop_assert_eq!(identity.to_string(), values.join(","));
    }
}
