//! Configuration error types

use thiserror::Error;

use crate::domain::subscription::PlanKind;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid Razorpay key id format")]
    InvalidKeyId,

    #[error("Razorpay API base URL must be http(s)")]
    InvalidApiBaseUrl,

    #[error("Subscription total_count must be greater than zero")]
    InvalidTotalCount,

    #[error("Company name must not be empty")]
    EmptyCompanyName,

    #[error("Invalid plan id for {0} plan")]
    InvalidPlanId(PlanKind),

    #[error("Amount for {0} plan must be greater than zero")]
    InvalidPlanAmount(PlanKind),
}
