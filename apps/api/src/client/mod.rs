//! Typed HTTP clients for the recruiter API and the external matcher service.
//!
//! These mirror the calls the recruiter frontend makes: job management, resume
//! upload, triggering a match run and reading shortlist results. Failures are not
//! retried and non-2xx responses are reported without further classification.

pub mod api;
pub mod matcher;

use reqwest::{Response, Url};
use thiserror::Error;

pub use api::ApiClient;
pub use matcher::{MatchResult, MatcherClient};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Matcher error: {0}")]
    Matcher(String),
}

/// Passes 2xx responses through and turns anything else into `ClientError::Status`.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Appends `segments` to `base`, percent-encoding each one. Job codes are free
/// text, so they must never be spliced into a URL unescaped.
fn endpoint(base: &str, segments: &[&str]) -> Result<Url, ClientError> {
    let invalid = |reason: String| ClientError::InvalidUrl {
        url: base.to_string(),
        reason,
    };
    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_escapes_free_text_codes() {
        let url = endpoint("http://localhost:8000", &["match", "ml 2024/β"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/match/ml%202024%2F%CE%B2");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("http://host/prefix/", &["api", "jobs"]).unwrap();
        assert_eq!(url.path(), "/prefix/api/jobs");
    }

    #[test]
    fn test_endpoint_rejects_garbage_base() {
        assert!(matches!(
            endpoint("not a url", &["api"]),
            Err(ClientError::InvalidUrl { .. })
        ));
    }
}
