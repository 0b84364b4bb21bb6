//! secp256k1 ECDSA verification of a claim's `signature` over its `value`.
//!
//! The signature is the 128-hex-character concatenation `r || s`. The signed
//! message is `SHA-256(message_bytes(value))`, where the byte form of `value`
//! depends on the platform's [`ValueEncoding`].

use k256::ecdsa::signature::Verifier;
use k256::ecdsa::{Signature, VerifyingKey};
use k256::FieldBytes;
use themis_types::ValueEncoding;

/// Hex length of a `r || s` signature.
pub const SIGNATURE_HEX_LEN: usize = 128;
/// Byte length of a SEC1 compressed public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// The bytes that were signed for `value`, or `None` when a hex value does
/// not decode.
pub fn message_bytes(value: &str, encoding: ValueEncoding) -> Option<Vec<u8>> {
    match encoding {
        ValueEncoding::Utf8 => Some(value.as_bytes().to_vec()),
        ValueEncoding::Hex => hex::decode(value).ok(),
    }
}

/// Verify a hex `r || s` signature over `value` with a compressed public key.
///
/// Returns `false` for any malformed input: wrong signature length, non-hex
/// content, a key that is not a 33-byte compressed point, or a value that does
/// not decode under `encoding`. High-S signatures are normalized before the
/// check.
pub fn verify_signature(
    pub_key_hex: &str,
    signature_hex: &str,
    value: &str,
    encoding: ValueEncoding,
) -> bool {
    let Some(signature) = parse_signature(signature_hex) else {
        return false;
    };
    let Some(verifying_key) = parse_compressed_pubkey(pub_key_hex) else {
        return false;
    };
    let Some(message) = message_bytes(value, encoding) else {
        return false;
    };
    verifying_key.verify(&message, &signature).is_ok()
}

fn parse_signature(signature_hex: &str) -> Option<Signature> {
    if signature_hex.len() != SIGNATURE_HEX_LEN {
        return None;
    }
    let (r_hex, s_hex) = signature_hex.as_bytes().split_at(SIGNATURE_HEX_LEN / 2);

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    hex::decode_to_slice(r_hex, &mut r).ok()?;
    hex::decode_to_slice(s_hex, &mut s).ok()?;

    let signature = Signature::from_scalars(FieldBytes::from(r), FieldBytes::from(s)).ok()?;
    Some(signature.normalize_s().unwrap_or(signature))
}

fn parse_compressed_pubkey(pub_key_hex: &str) -> Option<VerifyingKey> {
    let bytes = hex::decode(pub_key_hex).ok()?;
    if bytes.len() != COMPRESSED_PUBKEY_LEN || !matches!(bytes[0], 0x02 | 0x03) {
        return None;
    }
    VerifyingKey::from_sec1_bytes(&bytes).ok()
}
