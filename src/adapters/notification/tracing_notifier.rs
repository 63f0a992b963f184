//! Notifier that reports to the log stream.
//!
//! Stands in for an email or chat integration: operators alert on the
//! `notification` target.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::DomainError;
use crate::ports::{NotificationKind, Notifier};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, kind: NotificationKind, data: Value) -> Result<(), DomainError> {
        match kind {
            NotificationKind::WebhookError => {
                tracing::error!(target: "notification", kind = %kind, data = %data, "Operator notification");
            }
            NotificationKind::ContactSubmission => {
                let email = data.get("email").and_then(Value::as_str).unwrap_or_default();
                tracing::info!(target: "notification", kind = %kind, email = %email, "Operator notification");
            }
        }
        Ok(())
    }
}
