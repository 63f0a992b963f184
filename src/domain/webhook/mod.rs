//! Webhook domain module.
//!
//! Verifies and dispatches Razorpay subscription lifecycle webhooks.
//!
//! # Module Structure
//!
//! - `signature` - HMAC-SHA256 body signature verification
//! - `event` - Webhook envelope and known event kinds
//! - `handlers` - Per-event handlers
//! - `registry` - Event name to handler dispatch
//! - `outcome` - Handler results and acknowledgement body
//! - `errors` - Configuration / verification / handler error taxonomy

mod errors;
mod event;
mod handlers;
mod outcome;
mod registry;
mod signature;

pub use errors::{WebhookError, WebhookErrorKind};
pub use event::{SubscriptionEventKind, WebhookEvent};
pub use handlers::{SubscriptionChargedHandler, SubscriptionStateHandler, WebhookEventHandler};
pub use outcome::{HandlerOutcome, OutcomeStatus, WebhookAcknowledgement};
pub use registry::{WebhookDispatcher, WebhookHandlerRegistry};
pub use signature::{compute_signature, verify_signature, WebhookSignatureVerifier, SIGNATURE_HEADER};

#[cfg(test)]
pub(crate) use event::WebhookEventBuilder;
