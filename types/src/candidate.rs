//! Locator output: where a claim document might be found.

use std::fmt;

use crate::Identity;

/// A located piece of content that might resolve to a claim document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Candidate {
    /// Parse this text directly as a claim document.
    Literal(String),
    /// Fetch this URL and parse the response body.
    Indirect(String),
}

impl Candidate {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn indirect(url: impl Into<String>) -> Self {
        Self::Indirect(url.into())
    }

    pub fn is_indirect(&self) -> bool {
        matches!(self, Self::Indirect(_))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "literal ({} bytes)", text.len()),
            Self::Indirect(url) => write!(f, "{url}"),
        }
    }
}

/// Everything a locator gathered for one identifying token.
///
/// Candidate order is significant: the first one that resolves wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Located {
    pub candidates: Vec<Candidate>,
    pub identity: Identity,
}

impl Located {
    /// The uniform "nothing found" result.
    pub fn nothing() -> Self {
        Self::default()
    }

    pub fn new(candidates: Vec<Candidate>, identity: Identity) -> Self {
        Self {
            candidates,
            identity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
