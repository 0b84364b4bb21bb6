//! Phases of a single verification run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a run currently is. Every phase can move to `Failed`, which absorbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationPhase {
    /// Asking the platform locator for candidates.
    Locate,
    /// Walking candidates until one yields a claim document.
    Resolve,
    /// Gating the resolved document on its required keys.
    SchemaCheck,
    SignatureCheck,
    AddressCheck,
    /// Comparing the signed value with the caller's expected value. Runs
    /// after `AddressCheck` so a forged claim still reports a bad signature or
    /// address first.
    ValueCheck,
    Done,
    Failed,
}

impl VerificationPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for VerificationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Locate => "LOCATE",
            Self::Resolve => "RESOLVE",
            Self::SchemaCheck => "SCHEMA_CHECK",
            Self::SignatureCheck => "SIGNATURE_CHECK",
            Self::AddressCheck => "ADDRESS_CHECK",
            Self::ValueCheck => "VALUE_CHECK",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
        };
        f.write_str(name)
    }
}

/// Ordered record of the phases a run entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseTrace {
    phases: Vec<VerificationPhase>,
}

impl PhaseTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn enter(&mut self, phase: VerificationPhase) {
        tracing::debug!(%phase, "verification phase");
        self.phases.push(phase);
    }

    pub fn phases(&self) -> &[VerificationPhase] {
        &self.phases
    }

    pub fn visited(&self, phase: VerificationPhase) -> bool {
        self.phases.contains(&phase)
    }

    pub fn last(&self) -> Option<VerificationPhase> {
        self.phases.last().copied()
    }
}
