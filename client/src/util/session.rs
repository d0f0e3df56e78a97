//! Browser `localStorage` access for the session token.
//!
//! Requires a browser environment; every helper is inert in SSR and tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Storage key the auth provider writes the session token under.
pub const TOKEN_KEY: &str = "@Cadastro:token";

/// Read the stored session token, ignoring blank values.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        if token.trim().is_empty() { None } else { Some(token) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Drop everything cached in `localStorage` for this origin.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.clear().is_err() {
                log::warn!("localStorage clear failed");
            }
        }
    }
}
