#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use themis_crypto::{verify_address, verify_signature};
use themis_types::{AddressEncoding, ValueEncoding};

#[derive(Arbitrary, Debug)]
struct ClaimInput {
    address: String,
    pub_key: String,
    value: String,
    signature: String,
    hrp: Option<String>,
}

fuzz_target!(|input: ClaimInput| {
    // Malformed input must be rejected, never panic.
    for encoding in [ValueEncoding::Utf8, ValueEncoding::Hex] {
        let _ = verify_signature(&input.pub_key, &input.signature, &input.value, encoding);
    }

    let _ = verify_address(&input.address, &input.pub_key, &AddressEncoding::Hex);
    let bech32 = AddressEncoding::Bech32 { hrp: input.hrp };
    let _ = verify_address(&input.address, &input.pub_key, &bech32);
});
