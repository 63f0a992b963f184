//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PIXELPERFECT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pixelperfect_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod payment;
mod plans;
mod server;
mod site;

pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use plans::{PlanSettings, PlansConfig};
pub use server::{Environment, ServerConfig};
pub use site::SiteConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully;
/// payment features stay disabled until their credentials are set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment configuration (Razorpay)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Public site identity
    #[serde(default)]
    pub site: SiteConfig,

    /// Plan catalog
    #[serde(default)]
    pub plans: PlansConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PIXELPERFECT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PIXELPERFECT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PIXELPERFECT__PAYMENT__WEBHOOK_SECRET=...` -> `payment.webhook_secret = ...`
    /// - `PIXELPERFECT__PLANS__MONTHLY__PLAN_ID=plan_...` -> `plans.monthly.plan_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PIXELPERFECT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        self.site.validate()?;
        self.plans.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
