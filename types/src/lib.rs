//! Fundamental types for Themis claim verification.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the claim document found on a platform, the candidates a locator produces,
//! platform-asserted identity fields, encoding conventions, and the final
//! verification result with its typed failure reason.

pub mod candidate;
pub mod claim;
pub mod encoding;
pub mod error;
pub mod identity;
pub mod result;

pub use candidate::{Candidate, Located};
pub use claim::{ClaimDocument, REQUIRED_FIELDS};
pub use encoding::{AddressEncoding, EncodingParseError, ValueEncoding};
pub use error::{ErrorKind, FailureReason};
pub use identity::{Identity, IdentityField};
pub use result::{Provenance, VerificationResult};
