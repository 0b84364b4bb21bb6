//! Verification orchestrator: connects locator, resolver and the two
//! cryptographic checks into one pass/fail decision.
//!
//! ```text
//! LOCATE → RESOLVE → SCHEMA_CHECK → SIGNATURE_CHECK → ADDRESS_CHECK [→ VALUE_CHECK] → DONE
//!    ↘         ↘                         ↘                 ↘                ↘
//!                                  FAILED(reason)
//! ```

use themis_crypto::{message_bytes, verify_address, verify_signature};
use themis_http::HttpClient;
use themis_types::{ClaimDocument, FailureReason, Located, VerificationResult};

use crate::locator::Locator;
use crate::policy::VerificationPolicy;
use crate::resolver::{Resolved, Resolver};
use crate::state::{PhaseTrace, VerificationPhase};

/// Runs claim verification for one platform policy.
///
/// Holds no per-run state, so one orchestrator can serve any number of
/// sequential runs.
pub struct VerificationOrchestrator<H> {
    resolver: Resolver<H>,
    policy: VerificationPolicy,
}

impl<H: HttpClient> VerificationOrchestrator<H> {
    pub fn new(http: H, policy: VerificationPolicy) -> Self {
        Self {
            resolver: Resolver::new(http),
            policy,
        }
    }

    /// Locate, resolve and check the claim for `token`.
    pub fn verify<L: Locator + ?Sized>(&self, locator: &L, token: &L::Token) -> VerificationResult {
        self.verify_traced(locator, token).0
    }

    /// [`verify`](Self::verify), also returning the phases the run entered.
    pub fn verify_traced<L: Locator + ?Sized>(
        &self,
        locator: &L,
        token: &L::Token,
    ) -> (VerificationResult, PhaseTrace) {
        let mut trace = PhaseTrace::new();
        trace.enter(VerificationPhase::Locate);
        let located = locator.locate(token);
        tracing::debug!(
            platform = locator.platform(),
            candidates = located.candidates.len(),
            "located"
        );

        let result = self.verify_located(located, &mut trace);
        match &result {
            VerificationResult::Verified { source, .. } => {
                tracing::info!(platform = locator.platform(), %source, "claim verified");
            }
            VerificationResult::Failed { reason } => {
                tracing::warn!(platform = locator.platform(), %reason, "claim rejected");
            }
        }
        (result, trace)
    }

    /// Continue a run from already-located candidates.
    pub fn verify_located(&self, located: Located, trace: &mut PhaseTrace) -> VerificationResult {
        if located.is_empty() {
            return fail(trace, FailureReason::NoCandidates);
        }

        trace.enter(VerificationPhase::Resolve);
        let Some(Resolved { document, source }) = self.resolver.resolve(&located.candidates) else {
            return fail(trace, FailureReason::NoValidDocument);
        };

        // The resolver only returns documents that passed the schema gate.
        trace.enter(VerificationPhase::SchemaCheck);

        if let Err(reason) = check_document(&document, &self.policy, trace) {
            return fail(trace, reason);
        }

        trace.enter(VerificationPhase::Done);
        VerificationResult::Verified {
            value: document.value,
            signature: document.signature,
            identity: located.identity,
            source,
        }
    }
}

/// Run the signature, address and optional value checks on one document.
pub fn check_document(
    document: &ClaimDocument,
    policy: &VerificationPolicy,
    trace: &mut PhaseTrace,
) -> Result<(), FailureReason> {
    trace.enter(VerificationPhase::SignatureCheck);
    if !verify_signature(
        &document.pub_key,
        &document.signature,
        &document.value,
        policy.value_encoding,
    ) {
        return Err(FailureReason::InvalidSignature);
    }

    trace.enter(VerificationPhase::AddressCheck);
    if !verify_address(&document.address, &document.pub_key, &policy.address_encoding) {
        return Err(FailureReason::InvalidAddress);
    }

    if let Some(expected) = &policy.expected_value {
        trace.enter(VerificationPhase::ValueCheck);
        let signed = message_bytes(&document.value, policy.value_encoding);
        if signed.as_deref() != Some(expected.as_bytes()) {
            return Err(FailureReason::ValueMismatch);
        }
    }

    Ok(())
}

fn fail(trace: &mut PhaseTrace, reason: FailureReason) -> VerificationResult {
    trace.enter(VerificationPhase::Failed);
    VerificationResult::failed(reason)
}
