//! Typed failure reasons produced by the verification orchestrator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a verification run did not succeed.
///
/// The `Display` text is the user-facing reason the CLI prints.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FailureReason {
    #[error("no candidates found")]
    NoCandidates,

    #[error("no valid claim document found")]
    NoValidDocument,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid address")]
    InvalidAddress,

    #[error("signed value does not match the expected value")]
    ValueMismatch,
}

impl FailureReason {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoCandidates => ErrorKind::NotFound,
            Self::NoValidDocument => ErrorKind::MalformedDocument,
            Self::InvalidSignature => ErrorKind::InvalidSignature,
            Self::InvalidAddress => ErrorKind::InvalidAddress,
            Self::ValueMismatch => ErrorKind::ValueMismatch,
        }
    }
}

/// Coarse error taxonomy shared by every layer.
///
/// `UpstreamUnavailable` never reaches a [`FailureReason`]: a failed fetch only
/// disqualifies one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    MalformedDocument,
    InvalidSignature,
    InvalidAddress,
    UpstreamUnavailable,
    ValueMismatch,
}
