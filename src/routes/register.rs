//! `POST /api/register`: relay to the auth service.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use client::net::types::RegistrationPayload;

use crate::services::register::{UpstreamReply, forward_registration};
use crate::state::AppState;

/// Message returned when the auth service cannot be reached.
pub const UPSTREAM_UNAVAILABLE: &str = "Serviço de cadastro indisponível";

pub async fn register(State(state): State<AppState>, Json(payload): Json<RegistrationPayload>) -> Response {
    match forward_registration(&state.http, &state.config.register_url(), &payload).await {
        Ok(reply) => {
            tracing::info!(status = reply.status, "registration relayed");
            relay_response(reply)
        }
        Err(e) => {
            tracing::warn!(error = %e, "registration relay failed");
            (StatusCode::BAD_GATEWAY, Json(UPSTREAM_UNAVAILABLE)).into_response()
        }
    }
}

/// Turn the upstream answer into our response, preserving status and body.
pub(crate) fn relay_response(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = reply
        .content_type
        .and_then(|ct| HeaderValue::from_str(&ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static("text/plain; charset=utf-8"));
    (status, [(CONTENT_TYPE, content_type)], reply.body).into_response()
}
