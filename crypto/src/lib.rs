//! Cryptographic checks behind a Themis claim.
//!
//! - **SHA-256** digests the signed message and feeds the address hash
//! - **secp256k1 ECDSA** verifies `signature` over `value` with `pub_key`
//! - **RIPEMD-160(SHA-256)** derives the account address, rendered as hex or bech32
//!
//! Every verifier here is a total predicate: malformed input yields `false`,
//! never an error or a panic.

pub mod address;
pub mod hash;
pub mod provider;
pub mod sign;

pub use address::{derive_bech32_address, derive_hex_address, verify_address};
pub use hash::{hash160, ripemd160, sha256};
pub use provider::ProviderStatus;
pub use sign::{message_bytes, verify_signature, COMPRESSED_PUBKEY_LEN, SIGNATURE_HEX_LEN};
