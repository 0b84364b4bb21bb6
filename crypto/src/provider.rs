//! One-time crypto provider self-check.
//!
//! The hash primitives are compiled in, so there is nothing to install. `init`
//! runs known-answer vectors once per process and logs the outcome. It never
//! aborts the caller.

use std::sync::OnceLock;

use crate::hash::{ripemd160, sha256};

static STATUS: OnceLock<ProviderStatus> = OnceLock::new();

const SHA256_ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const RIPEMD160_ABC: &str = "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc";

/// Outcome of the provider self-check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderStatus {
    pub sha256: bool,
    pub ripemd160: bool,
}

impl ProviderStatus {
    pub fn is_ready(&self) -> bool {
        self.sha256 && self.ripemd160
    }
}

/// Run the self-check on first call; later calls return the recorded status.
pub fn init() -> ProviderStatus {
    *STATUS.get_or_init(|| {
        let status = ProviderStatus {
            sha256: hex::encode(sha256(b"abc")) == SHA256_ABC,
            ripemd160: hex::encode(ripemd160(b"abc")) == RIPEMD160_ABC,
        };
        if status.is_ready() {
            tracing::debug!("crypto provider ready (sha256, ripemd160)");
        } else {
            tracing::warn!(
                sha256 = status.sha256,
                ripemd160 = status.ripemd160,
                "crypto provider self-check failed; address verification may reject valid claims"
            );
        }
        status
    })
}
