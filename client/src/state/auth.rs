//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided through Leptos context as `RwSignal<AuthState>`. The token lives in
//! `localStorage`, which only exists in the browser, so the state starts out
//! loading and the app flips it once hydration has read storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the session token and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

impl AuthState {
    /// State after storage has been read.
    #[must_use]
    pub fn loaded(token: Option<String>) -> Self {
        Self { token, loading: false }
    }
}

/// What a guest-only page should do with the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionGate {
    /// Storage not read yet; render nothing.
    Pending,
    /// A session exists; leave for the dashboard.
    Authenticated,
    /// No session; show the page.
    Anonymous,
}

#[must_use]
pub fn session_gate(state: &AuthState) -> SessionGate {
    if state.loading {
        return SessionGate::Pending;
    }
    match state.token.as_deref() {
        Some(token) if !token.trim().is_empty() => SessionGate::Authenticated,
        _ => SessionGate::Anonymous,
    }
}
