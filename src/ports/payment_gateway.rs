//! Payment gateway port for hosted subscription billing.
//!
//! Defines the contract for the payment provider integration (Razorpay).
//! The checkout UI opens the provider's hosted payment modal with the
//! subscription id returned from [`PaymentGateway::create_subscription`].
//!
//! # Design
//!
//! - **Gateway agnostic**: nothing here is Razorpay-specific except field names
//! - **Pass-through**: provider status, notes and timestamps are relayed unchanged

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a recurring subscription for a plan.
    ///
    /// Returns the provider's subscription record.
    async fn create_subscription(
        &self,
        options: SubscriptionOptions,
    ) -> Result<Subscription, PaymentError>;
}

/// Options sent to the provider when creating a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionOptions {
    /// Provider plan ID (plan_xxx).
    pub plan_id: String,

    /// Whether the provider emails the customer (1) or not (0).
    pub customer_notify: u8,

    /// Number of billing cycles before the subscription completes.
    pub total_count: u32,

    /// Free-form key/value notes stored on the subscription.
    pub notes: Map<String, Value>,
}

/// Subscription in the payment system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Provider's subscription ID (sub_xxx).
    pub id: String,

    /// Provider status (`created`, `active`, ...), relayed verbatim.
    pub status: String,

    /// Plan the subscription bills against.
    pub plan_id: String,

    /// Provider echo of the notify flag.
    #[serde(default)]
    pub customer_notify: Value,

    /// When the subscription was created (Unix timestamp).
    pub created_at: i64,

    /// Notes as stored by the provider (an empty list when none).
    #[serde(default)]
    pub notes: Value,
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,

    /// HTTP status the provider answered with (if it answered at all).
    pub http_status: Option<u16>,

    /// Raw provider error object (if available).
    pub details: Option<Value>,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            http_status: None,
            details: None,
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Attach the provider HTTP status.
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Attach the raw provider error object.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create a provider API error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }

    /// Whether the provider itself answered with an error status.
    pub fn is_provider_response(&self) -> bool {
        self.http_status.is_some()
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Request rejected as invalid by the provider.
    BadRequest,

    /// Resource not found.
    NotFound,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,
}

impl PaymentErrorCode {
    /// Classify a provider HTTP status.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => PaymentErrorCode::BadRequest,
            401 | 403 => PaymentErrorCode::AuthenticationError,
            404 => PaymentErrorCode::NotFound,
            429 => PaymentErrorCode::RateLimitExceeded,
            _ => PaymentErrorCode::ProviderError,
        }
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::BadRequest => "bad_request",
            PaymentErrorCode::NotFound => "not_found",
            PaymentErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
