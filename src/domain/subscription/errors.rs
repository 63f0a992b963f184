//! Subscription creation errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotConfigured | 500 |
//! | MissingPlanId | 400 |
//! | InvalidField | 400 |
//! | Provider | provider status (502 if unusable) |
//! | Gateway | 500 |

use axum::http::StatusCode;
use thiserror::Error;

use crate::ports::PaymentError;

/// Errors raised while creating a subscription.
#[derive(Debug, Clone, Error)]
pub enum SubscriptionError {
    /// Gateway credentials are missing.
    #[error("Payment system not properly configured")]
    NotConfigured,

    /// Request had no plan id.
    #[error("Plan ID is required to create subscription")]
    MissingPlanId,

    /// A request field had an unusable value.
    #[error("Invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    /// The provider answered with an error response.
    #[error("Provider rejected request: {0}")]
    Provider(PaymentError),

    /// The provider could not be reached or answered unintelligibly.
    #[error("Failed to create subscription: {0}")]
    Gateway(PaymentError),
}

impl SubscriptionError {
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        SubscriptionError::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Maps the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SubscriptionError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            SubscriptionError::MissingPlanId | SubscriptionError::InvalidField { .. } => {
                StatusCode::BAD_REQUEST
            }
            SubscriptionError::Provider(err) => err
                .http_status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            SubscriptionError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PaymentError> for SubscriptionError {
    fn from(err: PaymentError) -> Self {
        if err.is_provider_response() {
            SubscriptionError::Provider(err)
        } else {
            SubscriptionError::Gateway(err)
        }
    }
}
