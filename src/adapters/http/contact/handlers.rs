//! HTTP handlers for the contact form endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::contact::{SubmitContactCommand, SubmitContactHandler};
use crate::domain::contact::ContactError;
use crate::ports::{EventRecorder, Notifier};

use super::super::response::ErrorResponse;
use super::dto::{ContactRequest, ContactResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the contact endpoint.
#[derive(Clone)]
pub struct ContactAppState {
    pub recorder: Arc<dyn EventRecorder>,
    pub notifier: Arc<dyn Notifier>,
}

impl ContactAppState {
    pub fn submit_contact_handler(&self) -> SubmitContactHandler {
        SubmitContactHandler::new(self.recorder.clone(), self.notifier.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/contact - Accept a contact form submission
pub async fn submit_contact(
    State(state): State<ContactAppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ContactApiError> {
    let Json(req) = payload?;

    let cmd = SubmitContactCommand {
        name: req.name,
        email: req.email,
        message: req.message,
        client_ip: client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr)),
    };

    let result = state.submit_contact_handler().handle(cmd).await?;

    Ok(Json(ContactResponse::sent(result.received_at)))
}

/// First `X-Forwarded-For` hop, else the peer address.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error for the contact endpoint.
#[derive(Debug)]
pub enum ContactApiError {
    Contact(ContactError),
    Body(JsonRejection),
}

impl From<ContactError> for ContactApiError {
    fn from(err: ContactError) -> Self {
        Self::Contact(err)
    }
}

impl From<JsonRejection> for ContactApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> Response {
        match self {
            ContactApiError::Body(rejection) => ErrorResponse::new("Invalid request body")
                .with_message(rejection.body_text())
                .into_response_with(StatusCode::BAD_REQUEST),
            ContactApiError::Contact(err) => {
                let body = match &err {
                    ContactError::MissingFields => ErrorResponse::new("Missing required fields")
                        .with_message(err.to_string()),
                    ContactError::InvalidEmail => {
                        ErrorResponse::new("Invalid email format").with_message(err.to_string())
                    }
                    ContactError::Delivery(_) => ErrorResponse::new("Internal server error")
                        .with_message(
                            "Failed to send message. Please try again or contact us directly.",
                        )
                        .timestamped(),
                };
                body.into_response_with(err.status_code())
            }
        }
    }
}
