use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading_without_token() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.token.is_none());
}

#[test]
fn loaded_clears_loading_flag() {
    let state = AuthState::loaded(Some("tok".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("tok"));
}

// =============================================================
// session_gate
// =============================================================

#[test]
fn gate_is_pending_while_loading_even_with_token() {
    let state = AuthState { token: Some("tok".to_owned()), loading: true };
    assert_eq!(session_gate(&state), SessionGate::Pending);
}

#[test]
fn gate_is_authenticated_when_token_present() {
    assert_eq!(session_gate(&AuthState::loaded(Some("tok".to_owned()))), SessionGate::Authenticated);
}

#[test]
fn gate_is_anonymous_without_token() {
    assert_eq!(session_gate(&AuthState::loaded(None)), SessionGate::Anonymous);
}

#[test]
fn gate_treats_blank_token_as_anonymous() {
    assert_eq!(session_gate(&AuthState::loaded(Some("  ".to_owned()))), SessionGate::Anonymous);
}
