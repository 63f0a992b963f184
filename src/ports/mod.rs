//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventRecorder` - Persistence capability for received events
//! - `Notifier` - Operator notifications (webhook failures, contact form)
//! - `PaymentGateway` - Hosted subscription billing (Razorpay)

mod event_recorder;
mod notifier;
mod payment_gateway;

pub use event_recorder::EventRecorder;
pub use notifier::{NotificationKind, Notifier};
pub use payment_gateway::{
    PaymentError, PaymentErrorCode, PaymentGateway, Subscription, SubscriptionOptions,
};
