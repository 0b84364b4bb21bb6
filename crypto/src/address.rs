//! Account address derivation and comparison.
//!
//! An address is `RIPEMD160(SHA256(pub_key_bytes))`, rendered either as
//! uppercase hex (40 chars) or as bech32 under a chain-specific prefix,
//! e.g. `desmos1...`.

use bech32::{Bech32, Hrp};
use themis_types::AddressEncoding;

use crate::hash::hash160;

/// Uppercase hex address of a public key.
pub fn derive_hex_address(pub_key: &[u8]) -> String {
    hex::encode_upper(hash160(pub_key))
}

/// Bech32 address of a public key, or `None` when `hrp` is not a valid prefix.
pub fn derive_bech32_address(hrp: &str, pub_key: &[u8]) -> Option<String> {
    let hrp = Hrp::parse(hrp).ok()?;
    bech32::encode::<Bech32>(hrp, &hash160(pub_key)).ok()
}

/// Check that `address` is the derivation of `pub_key_hex` under `encoding`.
///
/// Hex addresses compare case-insensitively. Bech32 addresses must decode
/// with a valid checksum, carry the configured prefix when one is set, and
/// hold exactly the 20-byte digest.
pub fn verify_address(address: &str, pub_key_hex: &str, encoding: &AddressEncoding) -> bool {
    let Ok(pub_key) = hex::decode(pub_key_hex) else {
        return false;
    };
    let digest = hash160(&pub_key);

    match encoding {
        AddressEncoding::Hex => address.to_ascii_uppercase() == hex::encode_upper(digest),
        AddressEncoding::Bech32 { hrp } => {
            let Ok((decoded_hrp, payload)) = bech32::decode(address) else {
                return false;
            };
            if let Some(expected) = hrp {
                if !decoded_hrp.as_str().eq_ignore_ascii_case(expected) {
                    return false;
                }
            }
            payload == digest
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUB_KEY: &str = "033024e9e0ad4f93045ef5a60bb92171e6418cd13b082e7a7bc3ed05312a0b417d";
    const HEX_ADDRESS: &str = "8902A4822B87C1ADED60AE947044E614BD4CAEE2";
    const BECH32_ADDRESS: &str = "desmos13yp2fq3tslq6mmtq4628q38xzj75ethzela9uu";

    fn pub_key_bytes() -> Vec<u8> {
        hex::decode(PUB_KEY).unwrap()
    }

    #[test]
    fn derive_hex_matches_known_address() {
        assert_eq!(derive_hex_address(&pub_key_bytes()), HEX_ADDRESS);
    }

    #[test]
    fn derive_bech32_matches_known_address() {
        assert_eq!(
            derive_bech32_address("desmos", &pub_key_bytes()).as_deref(),
            Some(BECH32_ADDRESS)
        );
    }

    #[test]
    fn hex_address_verifies() {
        assert!(verify_address(HEX_ADDRESS, PUB_KEY, &AddressEncoding::Hex));
    }

    #[test]
    fn hex_address_is_case_insensitive() {
        let lower = HEX_ADDRESS.to_lowercase();
        assert!(verify_address(&lower, PUB_KEY, &AddressEncoding::Hex));
    }

    #[test]
    fn altered_trailing_digit_fails() {
        let altered = "8902A4822B87C1ADED60AE947044E614BD4CAEE3";
        assert!(!verify_address(altered, PUB_KEY, &AddressEncoding::Hex));
    }

    #[test]
    fn flipping_any_hex_char_fails() {
        for i in 0..HEX_ADDRESS.len() {
            let mut chars: Vec<char> = HEX_ADDRESS.chars().collect();
            chars[i] = if chars[i] == '0' { '1' } else { '0' };
            let flipped: String = chars.into_iter().collect();
            assert!(
                !verify_address(&flipped, PUB_KEY, &AddressEncoding::Hex),
                "flip at {i} still verified"
            );
        }
    }

    #[test]
    fn non_hex_pub_key_fails() {
        assert!(!verify_address(HEX_ADDRESS, "not-hex", &AddressEncoding::Hex));
    }

    #[test]
    fn bech32_address_verifies() {
        assert!(verify_address(
            BECH32_ADDRESS,
            PUB_KEY,
            &AddressEncoding::bech32("desmos")
        ));
        assert!(verify_address(
            BECH32_ADDRESS,
            PUB_KEY,
            &AddressEncoding::Bech32 { hrp: None }
        ));
    }

    #[test]
    fn bech32_wrong_prefix_fails() {
        assert!(!verify_address(
            BECH32_ADDRESS,
            PUB_KEY,
            &AddressEncoding::bech32("cosmos")
        ));
    }

    #[test]
    fn bech32_bad_checksum_fails() {
        let bad = "desmos13yp2fq3tslq6mmtq4628q38xzj75ethzela9ua";
        assert!(!verify_address(bad, PUB_KEY, &AddressEncoding::Bech32 { hrp: None }));
    }

    #[test]
    fn bech32_other_key_fails() {
        let other = derive_bech32_address("desmos", &[0x02; 33]).unwrap();
        assert!(!verify_address(&other, PUB_KEY, &AddressEncoding::bech32("desmos")));
    }

    #[test]
    fn hex_address_under_bech32_encoding_fails() {
        assert!(!verify_address(
            HEX_ADDRESS,
            PUB_KEY,
            &AddressEncoding::Bech32 { hrp: None }
        ));
    }

    #[test]
    fn invalid_hrp_yields_none() {
        assert_eq!(derive_bech32_address("", &pub_key_bytes()), None);
    }
}
