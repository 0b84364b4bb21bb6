//! DNS TXT records: each record holds a claim inline or a URL pointing to one.

use serde::Deserialize;
use themis_http::{endpoint_url, HttpClient};
use themis_types::{Candidate, Identity, Located};
use themis_verification::{parse_claim, Locator};

use super::{bad_endpoint, fetch_json};
use crate::PlatformEndpoints;

/// `GET {lookup}/nslookup/{domain}` response.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    txt: Vec<TxtRecord>,
}

#[derive(Debug, Deserialize)]
struct TxtRecord {
    text: String,
}

/// Turn one TXT record into a candidate.
///
/// A record that already parses as a claim is `Literal`. Every other record
/// is taken as a URL and becomes `Indirect`; SPF or site verification entries
/// then fail at resolution like any unreachable link.
pub fn classify_record(text: &str) -> Candidate {
    if parse_claim(text).is_some() {
        Candidate::literal(text)
    } else {
        Candidate::indirect(text.trim())
    }
}

/// Locates claims published in a domain's TXT records.
pub struct DnsTxtLocator<H> {
    http: H,
    endpoints: PlatformEndpoints,
}

impl<H: HttpClient> DnsTxtLocator<H> {
    pub fn new(http: H, endpoints: PlatformEndpoints) -> Self {
        Self { http, endpoints }
    }
}

impl<H: HttpClient> Locator for DnsTxtLocator<H> {
    type Token = str;

    fn platform(&self) -> &str {
        "domain"
    }

    fn locate(&self, domain: &str) -> Located {
        let url = match endpoint_url(&self.endpoints.lookup, &["nslookup", domain]) {
            Ok(url) => url,
            Err(e) => return bad_endpoint("domain", e),
        };
        let Some(response) = fetch_json::<_, LookupResponse>(&self.http, "domain", &url) else {
            return Located::nothing();
        };

        let candidates: Vec<Candidate> = response
            .txt
            .iter()
            .map(|record| classify_record(&record.text))
            .collect();
        tracing::debug!(domain, records = candidates.len(), "read TXT records");

        Located::new(candidates, Identity::new().with("domain", domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INLINE_CLAIM: &str = r#"{"address":"470289c128641e77756e5a5bfaf6832d0e5c7211","pub_key":"02fc6a0f6001262c38dc0d1ec34b476ced1c394db2927860fb0359f5ba4a9cd964","signature":"e22a37f2a4e5c319bb460daf2e8113a4ab94f55687cbaa930364e3f20333e8810abbb08ee9d9236e74117088b7c214c8d62d524a55374e596e131073ecd5c113","value":"676f66696e645f6d65"}"#;

    #[test]
    fn inline_claim_is_literal() {
        assert_eq!(classify_record(INLINE_CLAIM), Candidate::literal(INLINE_CLAIM));
    }

    #[test]
    fn url_record_is_indirect() {
        assert_eq!(
            classify_record(" https://pastebin.com/raw/xz4S8WrW "),
            Candidate::indirect("https://pastebin.com/raw/xz4S8WrW")
        );
    }

    #[test]
    fn other_records_fall_back_to_indirect() {
        let token = "google-site-verification=TGkpVO2zOmAs4jva1JtL1Jg3r6xHLwK8pc7x-I2_AUQ";
        assert_eq!(classify_record(token), Candidate::indirect(token));
        assert_eq!(
            classify_record(" v=spf1 include:_spf.google.com ~all"),
            Candidate::indirect("v=spf1 include:_spf.google.com ~all")
        );
        assert_eq!(
            classify_record(r#"{"address":"only"}"#),
            Candidate::indirect(r#"{"address":"only"}"#)
        );
    }

    #[test]
    fn lookup_response_tolerates_missing_txt() {
        let response: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(response.txt.is_empty());
    }
}
