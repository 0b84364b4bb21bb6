//! Platform dispatch: build the right locator and run the orchestrator.

use themis_http::HttpClient;
use themis_types::VerificationResult;
use themis_verification::{VerificationOrchestrator, VerificationPolicy};

use crate::strategy::direct::DirectEndpointLocator;
use crate::strategy::dns_txt::DnsTxtLocator;
use crate::strategy::fixed::GistLocator;
use crate::strategy::free_text::FreeTextLocator;
use crate::{PlatformEndpoints, PlatformRequest};

/// Verify `request` under `policy`.
///
/// For platforms that bind the signed value to the account, the account name
/// from the request becomes the policy's expected value.
pub fn verify_request<H: HttpClient + Clone>(
    http: H,
    endpoints: &PlatformEndpoints,
    policy: VerificationPolicy,
    request: &PlatformRequest,
) -> VerificationResult {
    let policy = match request.account_name() {
        Some(account) => policy.with_expected_value(account),
        None => policy,
    };
    let orchestrator = VerificationOrchestrator::new(http.clone(), policy);
    let endpoints = endpoints.clone();

    tracing::debug!(platform = %request.platform(), "verifying");
    match request {
        PlatformRequest::Discord { username } => orchestrator.verify(
            &DirectEndpointLocator::discord(http, endpoints),
            username.as_str(),
        ),
        PlatformRequest::Telegram { username } => orchestrator.verify(
            &DirectEndpointLocator::telegram(http, endpoints),
            username.as_str(),
        ),
        PlatformRequest::Instagram { username } => orchestrator.verify(
            &DirectEndpointLocator::instagram(http, endpoints),
            username.as_str(),
        ),
        PlatformRequest::Twitter(token) => {
            orchestrator.verify(&FreeTextLocator::twitter(http, endpoints), token)
        }
        PlatformRequest::Youtube { user_id } => orchestrator.verify(
            &FreeTextLocator::youtube(http, endpoints),
            user_id.as_str(),
        ),
        PlatformRequest::Twitch { username } => orchestrator.verify(
            &FreeTextLocator::twitch(http, endpoints),
            username.as_str(),
        ),
        PlatformRequest::Domain { domain } => {
            orchestrator.verify(&DnsTxtLocator::new(http, endpoints), domain.as_str())
        }
        PlatformRequest::Github(token) => orchestrator.verify(&GistLocator::new(endpoints), token),
    }
}
