//! Service configuration.
//!
//! # Responsibilities
//! - Define the configuration structure for the service
//! - Load settings from the environment once at startup
//! - Validate the listening port and upstream base URL before the server binds
//!
//! Configuration is read once; there is no reload mechanism.

use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the upstream base URL.
/// Used by integration tests to point the client at a local mock server.
pub const UPSTREAM_ENV: &str = "ALADHAN_BASE_URL";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM: &str = "https://api.aladhan.com/v1";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} is not a valid port number")]
    InvalidPort { var: &'static str, value: String },

    #[error("invalid upstream base URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
}

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listening port (env `PORT`).
    pub port: u16,

    /// Base URL of the Aladhan calendar API (env `ALADHAN_BASE_URL`).
    pub upstream_base_url: String,

    /// Inbound request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_base_url: DEFAULT_UPSTREAM.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset. The upstream URL is parsed eagerly so a bad
    /// value fails at startup rather than on the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(PORT_ENV) {
            config.port = raw.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_ENV,
                value: raw,
            })?;
        }

        if let Ok(raw) = std::env::var(UPSTREAM_ENV) {
            config.upstream_base_url = raw;
        }

        config.upstream_url()?;
        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Parsed upstream base URL.
    pub fn upstream_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.upstream_base_url).map_err(|source| ConfigError::InvalidUrl {
            value: self.upstream_base_url.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream_base_url, "https://api.aladhan.com/v1");
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert!(config.upstream_url().is_ok());
    }

    #[test]
    fn rejects_malformed_upstream_url() {
        let config = ServiceConfig {
            upstream_base_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        assert!(matches!(
            config.upstream_url(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    // Env vars are process-global, so all env-driven cases run in one test.
    #[test]
    fn loads_overrides_from_env() {
        std::env::set_var(PORT_ENV, "8080");
        std::env::set_var(UPSTREAM_ENV, "http://127.0.0.1:9999/v1");
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_base_url, "http://127.0.0.1:9999/v1");

        std::env::set_var(PORT_ENV, "not-a-port");
        assert!(matches!(
            ServiceConfig::from_env(),
            Err(ConfigError::InvalidPort { .. })
        ));

        std::env::remove_var(PORT_ENV);
        std::env::remove_var(UPSTREAM_ENV);
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);
    }
}
