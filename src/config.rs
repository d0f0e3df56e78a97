//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_AUTH_API_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the external auth service, without trailing `/`.
    pub auth_api_url: String,
    pub auth_api_timeout: Duration,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_API_URL`: default `http://localhost:3001`
    /// - `AUTH_API_TIMEOUT_SECS`: default 10, must be positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a value is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a value is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let auth_api_url = lookup("AUTH_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTH_API_URL.to_owned());
        let timeout_secs: u64 = parse_or(&lookup, "AUTH_API_TIMEOUT_SECS", DEFAULT_AUTH_API_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "AUTH_API_TIMEOUT_SECS", value: "0".to_owned() });
        }

        Ok(Self { port, auth_api_url, auth_api_timeout: Duration::from_secs(timeout_secs) })
    }

    /// Upstream endpoint registrations are relayed to.
    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/register", self.auth_api_url)
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        _ => Ok(default),
    }
}
