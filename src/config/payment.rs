//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Razorpay)
///
/// Every credential is optional at load time. Missing API keys disable
/// subscription creation; a missing webhook secret makes the webhook
/// endpoint answer 500 rather than failing startup.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Public key id (rzp_test_... / rzp_live_...)
    pub key_id: Option<String>,

    /// API key secret
    pub key_secret: Option<SecretString>,

    /// Webhook signing secret from the Razorpay dashboard
    pub webhook_secret: Option<SecretString>,

    /// REST API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Billing cycles for new subscriptions
    #[serde(default = "default_total_count")]
    pub total_count: u32,
}

impl PaymentConfig {
    /// Key id and secret, when both are set and non-empty.
    pub fn credentials(&self) -> Option<(&str, &SecretString)> {
        let key_id = self.key_id.as_deref().filter(|k| !k.is_empty())?;
        let key_secret = non_empty(self.key_secret.as_ref())?;
        Some((key_id, key_secret))
    }

    /// Webhook secret, when set and non-empty.
    pub fn webhook_secret(&self) -> Option<&SecretString> {
        non_empty(self.webhook_secret.as_ref())
    }

    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.key_id
            .as_deref()
            .is_some_and(|k| k.starts_with("rzp_test_"))
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.key_id
            .as_deref()
            .is_some_and(|k| k.starts_with("rzp_live_"))
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let has_key_id = self.key_id.as_deref().is_some_and(|k| !k.is_empty());
        let has_key_secret = non_empty(self.key_secret.as_ref()).is_some();

        match (has_key_id, has_key_secret) {
            (true, false) => return Err(ValidationError::MissingRequired("PAYMENT__KEY_SECRET")),
            (false, true) => return Err(ValidationError::MissingRequired("PAYMENT__KEY_ID")),
            _ => {}
        }

        if has_key_id && !self.key_id.as_deref().is_some_and(|k| k.starts_with("rzp_")) {
            return Err(ValidationError::InvalidKeyId);
        }
        if !self.api_base_url.starts_with("https://") && !self.api_base_url.starts_with("http://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        if self.total_count == 0 {
            return Err(ValidationError::InvalidTotalCount);
        }

        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: None,
            key_secret: None,
            webhook_secret: None,
            api_base_url: default_api_base_url(),
            total_count: default_total_count(),
        }
    }
}

fn non_empty(secret: Option<&SecretString>) -> Option<&SecretString> {
    secret.filter(|s| !s.expose_secret().is_empty())
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com".to_string()
}

fn default_total_count() -> u32 {
    12
}
