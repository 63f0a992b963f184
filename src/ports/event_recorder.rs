//! EventRecorder port - Persistence capability for received events.
//!
//! Webhook handlers and contact intake hand every accepted event to this
//! port. The service ships only a tracing-backed implementation; a database
//! adapter plugs in here.
//!
//! ## Duplicates
//!
//! Razorpay redelivers a webhook whenever it sees a non-2xx response, so the
//! same event can reach `save` more than once. Implementations that persist
//! MUST be idempotent.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::DomainError;

/// Port for recording received events.
///
/// # Example
///
/// ```ignore
/// recorder.save("subscription.activated", &event.payload_value()).await?;
/// ```
#[async_trait]
pub trait EventRecorder: Send + Sync {
    /// Record an event by name together with its payload.
    async fn save(&self, event: &str, payload: &Value) -> Result<(), DomainError>;
}
