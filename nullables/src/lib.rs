//! Nullable infrastructure for deterministic testing.
//!
//! Everything Themis does outside the process (HTTP lookups, dereferencing
//! candidate URLs) sits behind a trait. This crate provides test-friendly
//! implementations that:
//! - Return scripted responses
//! - Record every request for assertions
//! - Never touch the network
//!
//! Usage: hand a `NullHttpClient` to a locator or orchestrator in place of
//! `ReqwestClient`.

pub mod locator;
pub mod network;

pub use locator::StaticLocator;
pub use network::NullHttpClient;
