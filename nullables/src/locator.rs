//! Nullable locator: returns a fixed result and records tokens.

use std::cell::RefCell;

use themis_types::{Candidate, Identity, Located};
use themis_verification::Locator;

/// A locator that always yields the same candidates.
pub struct StaticLocator {
    located: Located,
    tokens: RefCell<Vec<String>>,
}

impl StaticLocator {
    pub fn new(located: Located) -> Self {
        Self {
            located,
            tokens: RefCell::new(Vec::new()),
        }
    }

    /// A locator that finds nothing.
    pub fn empty() -> Self {
        Self::new(Located::nothing())
    }

    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self::new(Located::new(candidates, Identity::new()))
    }

    /// Tokens passed to `locate`, in order.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.borrow().clone()
    }
}

impl Locator for StaticLocator {
    type Token = str;

    fn platform(&self) -> &str {
        "static"
    }

    fn locate(&self, token: &str) -> Located {
        self.tokens.borrow_mut().push(token.to_string());
        self.located.clone()
    }
}
