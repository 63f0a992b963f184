//! HTTP adapters - REST API implementations.
//!
//! Each feature has its own HTTP adapter; `router` merges them and applies
//! the shared tower-http layers.

pub mod checkout;
pub mod contact;
pub mod response;
pub mod router;
pub mod webhook;

// Re-export key types for convenience
pub use checkout::{checkout_routes, CheckoutAppState};
pub use contact::{contact_routes, ContactAppState};
pub use response::ErrorResponse;
pub use router::{api_router, AppState};
pub use webhook::{webhook_routes, WebhookAppState};
