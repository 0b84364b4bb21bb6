//! The outcome of one verification run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{FailureReason, Identity};

/// Where the winning claim document came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// The n-th candidate (0-based) was literal text.
    Literal { index: usize },
    /// The document was fetched from this URL.
    Url(String),
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { index } => write!(f, "literal #{index}"),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Pass/fail decision of the orchestrator. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationResult {
    Verified {
        value: String,
        signature: String,
        identity: Identity,
        source: Provenance,
    },
    Failed {
        reason: FailureReason,
    },
}

impl VerificationResult {
    pub fn failed(reason: FailureReason) -> Self {
        Self::Failed { reason }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }

    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            Self::Failed { reason } => Some(reason),
            Self::Verified { .. } => None,
        }
    }

    /// `value,signature[,identity...]` for a verified run.
    pub fn output_line(&self) -> Option<String> {
        match self {
            Self::Verified {
                value,
                signature,
                identity,
                ..
            } => {
                if identity.is_empty() {
                    Some(format!("{value},{signature}"))
                } else {
                    Some(format!("{value},{signature},{identity}"))
                }
            }
            Self::Failed { .. } => None,
        }
    }
}
