//! Shared JSON error body and method fallbacks.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::Timestamp;

/// JSON error body used by every endpoint.
///
/// `error` is a short title; the remaining fields appear only when set.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            code: None,
            details: None,
            timestamp: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_details(mut self, details: Option<Value>) -> Self {
        self.details = details;
        self
    }

    /// Stamps the body with the current time.
    pub fn timestamped(mut self) -> Self {
        self.timestamp = Some(Timestamp::now());
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Fallback for checkout endpoints that only accept POST.
pub async fn post_only() -> Response {
    ErrorResponse::new("Method not allowed")
        .with_message("Only POST requests are allowed")
        .into_response_with(StatusCode::METHOD_NOT_ALLOWED)
}

/// Plain `OPTIONS` outside a CORS preflight.
pub async fn options_ok() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_are_omitted() {
        let body = serde_json::to_value(ErrorResponse::new("Invalid webhook signature")).unwrap();
        assert_eq!(body, json!({ "error": "Invalid webhook signature" }));
    }

    #[test]
    fn all_fields_serialize() {
        let body = serde_json::to_value(
            ErrorResponse::new("Razorpay API Error")
                .with_message("bad plan")
                .with_code("BAD_REQUEST_ERROR")
                .with_details(Some(json!({ "field": "plan_id" })))
                .timestamped(),
        )
        .unwrap();

        assert_eq!(body["code"], "BAD_REQUEST_ERROR");
        assert_eq!(body["details"]["field"], "plan_id");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn post_only_answers_405() {
        let response = post_only().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
