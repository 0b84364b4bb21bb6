#![no_main]

use libfuzzer_sys::fuzz_target;
use themis_connectors::extract_urls;
use themis_connectors::strategy::dns_txt::classify_record;
use themis_verification::{parse_claim, validate};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Schema check agrees with the typed parse.
    let parsed = parse_claim(&text);
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        assert_eq!(validate(&value), parsed.is_some());
    }

    let _ = classify_record(&text);

    for url in extract_urls(&text) {
        assert!(url.starts_with("http://") || url.starts_with("https://"));
        assert!(!url.chars().any(char::is_whitespace));
    }
});
