//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Razorpay REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::new(key_id, key_secret);
//! let adapter = RazorpayPaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::PaymentConfig;
use crate::ports::{
    PaymentError, PaymentErrorCode, PaymentGateway, Subscription, SubscriptionOptions,
};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Public key id (rzp_live_... or rzp_test_...).
    key_id: String,

    /// Key secret paired with the key id.
    key_secret: SecretString,

    /// Base URL for Razorpay API (default: https://api.razorpay.com).
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: SecretString) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret,
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Build from application configuration.
    ///
    /// Returns `None` unless both key id and key secret are set.
    pub fn from_payment_config(config: &PaymentConfig) -> Option<Self> {
        let (key_id, key_secret) = config.credentials()?;
        Some(Self::new(key_id, key_secret.clone()).with_base_url(config.api_base_url.clone()))
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Razorpay payment gateway adapter.
pub struct RazorpayPaymentAdapter {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayPaymentAdapter {
    /// Create a new Razorpay adapter with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayPaymentAdapter {
    async fn create_subscription(
        &self,
        options: SubscriptionOptions,
    ) -> Result<Subscription, PaymentError> {
        let url = format!("{}/v1/subscriptions", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.expose_secret()))
            .json(&options)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "Razorpay create_subscription failed"
            );
            return Err(api_error(status.as_u16(), &error_text));
        }

        response.json::<Subscription>().await.map_err(|e| {
            PaymentError::new(
                PaymentErrorCode::ProviderError,
                format!("Failed to parse Razorpay response: {}", e),
            )
        })
    }
}

/// Converts a Razorpay error response into a `PaymentError`.
///
/// Razorpay errors look like `{"error": {"code": "...", "description": "...", ...}}`.
/// The whole `error` object is kept as details.
fn api_error(status: u16, body: &str) -> PaymentError {
    let error = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").cloned())
        .filter(Value::is_object);

    let description = error
        .as_ref()
        .and_then(|e| e.get("description"))
        .and_then(Value::as_str)
        .unwrap_or("Failed to create subscription");

    let mut err = PaymentError::new(PaymentErrorCode::from_http_status(status), description)
        .with_http_status(status);

    if let Some(error) = error {
        if let Some(code) = error.get("code").and_then(Value::as_str) {
            err = err.with_provider_code(code);
        }
        err = err.with_details(error);
    }

    err
}
