//! First-match resolution of located candidates.

use themis_http::HttpClient;
use themis_types::{Candidate, ClaimDocument, Provenance};

use crate::error::CandidateError;
use crate::schema;

/// A schema-valid claim document and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub document: ClaimDocument,
    pub source: Provenance,
}

/// Walks candidates in order and returns the first valid claim document.
///
/// Candidates after the first success are never fetched.
pub struct Resolver<H> {
    http: H,
}

impl<H: HttpClient> Resolver<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn resolve(&self, candidates: &[Candidate]) -> Option<Resolved> {
        for (index, candidate) in candidates.iter().enumerate() {
            match self.resolve_candidate(candidate) {
                Ok(document) => {
                    let source = match candidate {
                        Candidate::Literal(_) => Provenance::Literal { index },
                        Candidate::Indirect(url) => Provenance::Url(url.clone()),
                    };
                    tracing::debug!(index, %source, "candidate resolved");
                    return Some(Resolved { document, source });
                }
                Err(e) => {
                    tracing::debug!(
                        index,
                        %candidate,
                        kind = ?e.kind(),
                        error = %e,
                        "candidate rejected"
                    );
                }
            }
        }
        None
    }

    /// Resolve a single candidate.
    pub fn resolve_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<ClaimDocument, CandidateError> {
        match candidate {
            Candidate::Literal(text) => schema::parse_document(text),
            Candidate::Indirect(url) => {
                let body = self.http.get_text(url)?;
                schema::parse_document(&body)
            }
        }
    }
}
