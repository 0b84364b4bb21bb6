//! How a platform's claim fields are interpreted.

use serde::{Deserialize, Serialize};
use themis_types::{AddressEncoding, ValueEncoding};

/// Encoding rules and optional value binding applied by the orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationPolicy {
    pub value_encoding: ValueEncoding,
    pub address_encoding: AddressEncoding,
    /// When set, the signed value must equal this string after decoding.
    #[serde(default)]
    pub expected_value: Option<String>,
}

impl VerificationPolicy {
    pub fn new(value_encoding: ValueEncoding, address_encoding: AddressEncoding) -> Self {
        Self {
            value_encoding,
            address_encoding,
            expected_value: None,
        }
    }

    pub fn with_expected_value(mut self, expected: impl Into<String>) -> Self {
        self.expected_value = Some(expected.into());
        self
    }
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self::new(ValueEncoding::Hex, AddressEncoding::Hex)
    }
}
