//! Relay of registration requests to the external auth service.
//!
//! The host does not interpret the service's answer beyond transport errors:
//! status, content type and body travel back to the browser untouched so the
//! page can show the service's own message.

use client::net::types::RegistrationPayload;

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("auth service request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Raw answer from the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// POST the payload to `url` and capture whatever comes back.
///
/// # Errors
///
/// Returns `RegisterError::Upstream` if the service is unreachable, times
/// out, or the body cannot be read. HTTP error statuses are not errors here.
pub async fn forward_registration(
    http: &reqwest::Client,
    url: &str,
    payload: &RegistrationPayload,
) -> Result<UpstreamReply, RegisterError> {
    let resp = http.post(url).json(payload).send().await?;
    let status = resp.status().as_u16();
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = resp.bytes().await?.to_vec();
    Ok(UpstreamReply { status, content_type, body })
}
