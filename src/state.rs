//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! cheap to clone: the config sits behind an `Arc` and `reqwest::Client`
//! already shares its connection pool.

use std::sync::Arc;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an HTTP client bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.auth_api_timeout)
            .user_agent(concat!("cadastro/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
