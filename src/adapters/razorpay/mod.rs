//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Razorpay subscriptions.
//! Webhook verification lives in the domain (`domain::webhook`), since
//! Razorpay signs the raw body with a plain HMAC and needs no API access.
//!
//! # Configuration
//!
//! - `PIXELPERFECT__PAYMENT__KEY_ID`: Razorpay key id
//! - `PIXELPERFECT__PAYMENT__KEY_SECRET`: Razorpay key secret

mod mock_payment_gateway;
mod razorpay_adapter;

pub use mock_payment_gateway::MockPaymentGateway;
pub use razorpay_adapter::{RazorpayConfig, RazorpayPaymentAdapter};
