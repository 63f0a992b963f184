//! HTTP adapter for checkout endpoints.
//!
//! - `POST /api/create-subscription` - Create a Razorpay subscription
//! - `GET /api/plans` - Publishable key and plan catalog for the pricing page

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CreateSubscriptionRequest, PlansResponse, SubscriptionResponse};
pub use handlers::{CheckoutApiError, CheckoutAppState};
pub use routes::checkout_routes;
