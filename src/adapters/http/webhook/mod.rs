//! HTTP adapter for the Razorpay webhook endpoint.
//!
//! - `POST /api/webhook` - Verify, dispatch and acknowledge a webhook delivery

pub mod handlers;
pub mod routes;

pub use handlers::{WebhookApiError, WebhookAppState};
pub use routes::webhook_routes;
