//! The schema gate between resolved content and the verifiers.

use serde_json::Value;
use themis_types::{ClaimDocument, REQUIRED_FIELDS};

use crate::error::CandidateError;

/// True iff `doc` is a JSON object carrying every required claim key.
///
/// Field types and formats are not checked here; the signature and address
/// verifiers reject malformed values.
pub fn validate(doc: &Value) -> bool {
    match doc.as_object() {
        Some(object) => REQUIRED_FIELDS.iter().all(|key| object.contains_key(*key)),
        None => false,
    }
}

/// Parse `text` as JSON and gate it through [`validate`].
pub fn parse_claim(text: &str) -> Option<ClaimDocument> {
    parse_document(text).ok()
}

/// [`parse_claim`] with the reason for rejection.
pub fn parse_document(text: &str) -> Result<ClaimDocument, CandidateError> {
    let json: Value =
        serde_json::from_str(text.trim()).map_err(|e| CandidateError::NotJson(e.to_string()))?;
    if !validate(&json) {
        return Err(CandidateError::Schema);
    }
    ClaimDocument::from_json(&json).ok_or(CandidateError::Schema)
}
