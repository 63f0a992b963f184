//! HTTP handlers for the Razorpay webhook endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::webhook::{ProcessWebhookCommand, ProcessWebhookHandler};
use crate::domain::webhook::{
    WebhookDispatcher, WebhookError, WebhookErrorKind, WebhookSignatureVerifier, SIGNATURE_HEADER,
};
use crate::ports::Notifier;

use super::super::response::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the webhook endpoint.
#[derive(Clone)]
pub struct WebhookAppState {
    /// `None` when no webhook secret is configured.
    pub verifier: Option<WebhookSignatureVerifier>,
    pub dispatcher: Arc<dyn WebhookDispatcher>,
    pub notifier: Arc<dyn Notifier>,
}

impl WebhookAppState {
    pub fn process_webhook_handler(&self) -> ProcessWebhookHandler {
        ProcessWebhookHandler::new(
            self.verifier.clone(),
            self.dispatcher.clone(),
            self.notifier.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhook - Receive a Razorpay webhook
///
/// The body is taken as raw bytes: the signature covers the exact bytes sent.
pub async fn receive_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let cmd = ProcessWebhookCommand {
        payload: body.to_vec(),
        signature,
    };

    let ack = state.process_webhook_handler().handle(cmd).await?;

    Ok(Json(ack))
}

/// Any other method on /api/webhook
pub async fn webhook_method_not_allowed() -> Response {
    ErrorResponse::new("Method not allowed").into_response_with(StatusCode::METHOD_NOT_ALLOWED)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for webhook errors.
#[derive(Debug)]
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        let body = match self.0.kind() {
            WebhookErrorKind::Configuration => ErrorResponse::new("Webhook secret not configured")
                .with_message(
                    "Please add PIXELPERFECT__PAYMENT__WEBHOOK_SECRET to environment variables",
                ),
            WebhookErrorKind::Verification => ErrorResponse::new("Invalid webhook signature"),
            WebhookErrorKind::Handler => ErrorResponse::new("Internal server error")
                .with_message("Webhook processing failed")
                .timestamped(),
        };
        body.into_response_with(self.0.status_code())
    }
}
