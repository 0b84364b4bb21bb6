//! Shared utilities for Themis.

pub mod logging;

pub use logging::{init_logging, LogFormat};
