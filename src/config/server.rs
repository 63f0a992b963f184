//! Listener and runtime settings for the checkout server.
//!
//! `log_level` is optional: when unset the filter follows the environment,
//! verbose for local work and quieter in production where output is JSON.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`. Razorpay API calls are the slowest
/// thing a request waits on.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

const DEVELOPMENT_LOG_FILTER: &str =
    "info,pixelperfect_checkout=debug,tower_http=debug,reqwest=info";
const PRODUCTION_LOG_FILTER: &str = "warn,pixelperfect_checkout=info,tower_http=info";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// `EnvFilter` directive. `RUST_LOG` still wins when set.
    pub log_level: Option<String>,

    pub request_timeout_secs: u64,
}

/// Deployment environment. Production switches logging to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: None,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to. `host` must be an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidBindAddress(addr))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// The configured filter, or the environment's default when unset or blank.
    pub fn log_filter(&self) -> &str {
        match self.log_level.as_deref().map(str::trim) {
            Some(level) if !level.is_empty() => level,
            _ if self.is_production() => PRODUCTION_LOG_FILTER,
            _ => DEVELOPMENT_LOG_FILTER,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}
