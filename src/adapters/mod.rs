//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - Event recorders (tracing, in-memory)
//! - `http` - Axum REST API
//! - `notification` - Operator notifiers (tracing, in-memory)
//! - `razorpay` - Razorpay subscription gateway (HTTP, mock)

pub mod events;
pub mod http;
pub mod notification;
pub mod razorpay;

pub use events::{InMemoryEventRecorder, TracingEventRecorder};
pub use http::{api_router, AppState};
pub use notification::{InMemoryNotifier, TracingNotifier};
pub use razorpay::{MockPaymentGateway, RazorpayConfig, RazorpayPaymentAdapter};
