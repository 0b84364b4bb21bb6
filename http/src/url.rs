//! Lookup endpoint URL construction.

use reqwest::Url;

use crate::FetchError;

/// Append percent-encoded path `segments` to `base`.
///
/// A trailing `/` on `base` is ignored. An empty final segment yields a
/// trailing slash, as raw gist URLs require.
///
/// ```
/// # use themis_http::endpoint_url;
/// let url = endpoint_url("https://themis.example/", &["twitter", "users", "a b"]).unwrap();
/// assert_eq!(url, "https://themis.example/twitter/users/a%20b");
/// ```
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<String, FetchError> {
    let trimmed = base.trim_end_matches('/');
    let mut url =
        Url::parse(trimmed).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(format!("{base}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url.into())
}
