//! Axum router configuration for the contact endpoint.

use axum::{routing::post, Router};

use super::super::response::{options_ok, post_only};
use super::handlers::{submit_contact, ContactAppState};

/// Create the contact router.
///
/// # Routes
/// - `POST /api/contact` - Contact form submission
pub fn contact_routes() -> Router<ContactAppState> {
    Router::new().route(
        "/api/contact",
        post(submit_contact).options(options_ok).fallback(post_only),
    )
}
