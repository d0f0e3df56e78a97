//! REST API helpers for communicating with the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` where the error is already the message to
//! show the user, so pages can hand it straight to a notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::RegistrationPayload;

/// Same-origin endpoint relayed by the host to the auth service.
pub const REGISTER_ENDPOINT: &str = "/api/register";

/// Pull the human-readable message out of a rejected registration response.
///
/// The auth service answers with a bare JSON string (`"E-mail já cadastrado"`);
/// objects carrying `message`/`error` and plain text bodies are accepted too.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(message)) if !message.trim().is_empty() => return message,
        Ok(serde_json::Value::Object(map)) => {
            for key in ["message", "error"] {
                if let Some(serde_json::Value::String(message)) = map.get(key) {
                    if !message.trim().is_empty() {
                        return message.clone();
                    }
                }
            }
        }
        Ok(_) => {}
        Err(_) if !trimmed.is_empty() => return trimmed.to_owned(),
        Err(_) => {}
    }
    register_failed_message(status)
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    format!("Falha no cadastro ({status})")
}

/// Register a new account via `POST /api/register`.
///
/// # Errors
///
/// Returns the message to display when the request cannot be sent or the
/// service rejects the registration.
pub async fn register_user(payload: &RegistrationPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(rejection_message(status, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
