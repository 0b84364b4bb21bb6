//! HTTP plumbing for Themis locators and the resolver.
//!
//! Everything that touches the network goes through the [`HttpClient`] trait so
//! that tests can substitute a scripted client. [`ReqwestClient`] is the
//! production implementation: blocking, one request at a time, no retries.

pub mod client;
pub mod error;
pub mod url;

pub use client::{HttpClient, HttpConfig, HttpResponse, ReqwestClient};
pub use error::FetchError;
pub use url::endpoint_url;
