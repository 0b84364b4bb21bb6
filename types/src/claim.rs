//! The claim document an account holder publishes on a platform.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys every claim document must carry. Extra keys are ignored.
pub const REQUIRED_FIELDS: [&str; 4] = ["address", "pub_key", "value", "signature"];

/// An untrusted `address / pub_key / value / signature` tuple.
///
/// Holding a `ClaimDocument` only means the four keys were present. Whether the
/// fields are well-formed is decided later by the signature and address
/// verifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDocument {
    /// Address of the signer, uppercase hex or bech32 depending on the platform.
    pub address: String,
    /// Hex-encoded compressed secp256k1 public key.
    pub pub_key: String,
    /// The signed value, raw text or hex depending on the platform.
    pub value: String,
    /// Hex-encoded `r || s`, 128 characters.
    pub signature: String,
}

impl ClaimDocument {
    pub fn new(
        address: impl Into<String>,
        pub_key: impl Into<String>,
        value: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            pub_key: pub_key.into(),
            value: value.into(),
            signature: signature.into(),
        }
    }

    /// Build a document from a decoded JSON object.
    ///
    /// Returns `None` when `json` is not an object or lacks a required key.
    /// Non-string field values are kept as their JSON text so that the
    /// verifiers, not this constructor, reject them.
    pub fn from_json(json: &Value) -> Option<Self> {
        let object = json.as_object()?;
        let field = |key: &str| object.get(key).map(field_text);

        Some(Self {
            address: field("address")?,
            pub_key: field("pub_key")?,
            value: field("value")?,
            signature: field("signature")?,
        })
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
