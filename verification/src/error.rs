use themis_http::FetchError;
use themis_types::ErrorKind;
use thiserror::Error;

/// Why one candidate did not yield a claim document.
///
/// Candidate errors are logged and swallowed by the resolver; they never
/// become a run's failure reason on their own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CandidateError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("not JSON: {0}")]
    NotJson(String),

    #[error("missing required claim fields")]
    Schema,
}

impl CandidateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(e) => e.kind(),
            Self::NotJson(_) | Self::Schema => ErrorKind::MalformedDocument,
        }
    }
}
