//! Webhook error types for Razorpay webhook handling.
//!
//! Keeps configuration, verification and handler failures distinct so the
//! HTTP layer can answer each with its own status and body.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur during webhook processing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No webhook secret is configured. The request must not be processed.
    #[error("Webhook secret not configured")]
    SecretNotConfigured,

    /// Signature header missing or not matching the body.
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// Verified body could not be parsed as a webhook event.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Required entity or field missing from the event payload.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A registered handler or one of its collaborators failed.
    #[error("Handler error: {0}")]
    Handler(String),
}

/// Coarse classification of a [`WebhookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookErrorKind {
    Configuration,
    Verification,
    Handler,
}

impl WebhookError {
    /// Classifies the error into the configuration / verification / handler taxonomy.
    pub fn kind(&self) -> WebhookErrorKind {
        match self {
            WebhookError::SecretNotConfigured => WebhookErrorKind::Configuration,
            WebhookError::InvalidSignature => WebhookErrorKind::Verification,
            WebhookError::ParseError(_)
            | WebhookError::MissingField(_)
            | WebhookError::Handler(_) => WebhookErrorKind::Handler,
        }
    }

    /// Maps the error to an HTTP status code.
    ///
    /// Razorpay redelivers on any non-2xx response, so only handler failures
    /// and missing configuration answer 5xx.
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            WebhookErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            WebhookErrorKind::Verification => StatusCode::BAD_REQUEST,
            WebhookErrorKind::Handler => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error-notification side channel should fire.
    pub fn should_notify(&self) -> bool {
        self.kind() == WebhookErrorKind::Handler
    }
}
