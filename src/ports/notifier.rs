//! Notifier port - Out-of-band notifications to the site operator.
//!
//! Used for webhook failure alerts and new contact submissions. Callers
//! treat delivery as best-effort: a failed notification is logged and never
//! changes the response of the request that triggered it.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::DomainError;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Webhook processing failed after verification.
    WebhookError,
    /// A visitor sent the contact form.
    ContactSubmission,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::WebhookError => "webhook_error",
            NotificationKind::ContactSubmission => "contact_submission",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for sending operator notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification of the given kind with a JSON body.
    async fn notify(&self, kind: NotificationKind, data: Value) -> Result<(), DomainError>;
}
