//! Account-ownership claim verification.
//!
//! A claim document (`address`, `pub_key`, `value`, `signature`) published on
//! some platform proves that the holder of `pub_key` controls the account.
//! This crate holds the protocol every platform shares:
//!
//! 1. a [`Locator`] turns a platform token into ordered candidates;
//! 2. the [`Resolver`] returns the first candidate that parses into a
//!    schema-valid document;
//! 3. the [`VerificationOrchestrator`] checks its signature and address
//!    under the platform's [`VerificationPolicy`].
//!
//! Platform-specific locators live in `themis-connectors`.

pub mod error;
pub mod locator;
pub mod orchestrator;
pub mod policy;
pub mod resolver;
pub mod schema;
pub mod state;

pub use error::CandidateError;
pub use locator::Locator;
pub use orchestrator::{check_document, VerificationOrchestrator};
pub use policy::VerificationPolicy;
pub use resolver::{Resolved, Resolver};
pub use schema::{parse_claim, validate};
pub use state::{PhaseTrace, VerificationPhase};
