//! In-memory notifier for testing.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{NotificationKind, Notifier};

/// Captures notifications for test assertions.
///
/// # Panics
///
/// Methods panic if internal locks are poisoned. Test use only.
#[derive(Default)]
pub struct InMemoryNotifier {
    sent: RwLock<Vec<(NotificationKind, Value)>>,
    failing: RwLock<bool>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification attempted, including failed ones.
    pub fn sent(&self) -> Vec<(NotificationKind, Value)> {
        self.sent
            .read()
            .expect("InMemoryNotifier: sent lock poisoned")
            .clone()
    }

    /// Returns notifications of one kind.
    pub fn sent_of_kind(&self, kind: NotificationKind) -> Vec<Value> {
        self.sent()
            .into_iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, data)| data)
            .collect()
    }

    /// Makes every subsequent `notify` fail after capturing it.
    pub fn fail_deliveries(&self, failing: bool) {
        *self
            .failing
            .write()
            .expect("InMemoryNotifier: failing lock poisoned") = failing;
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, kind: NotificationKind, data: Value) -> Result<(), DomainError> {
        self.sent
            .write()
            .expect("InMemoryNotifier: sent lock poisoned")
            .push((kind, data));

        if *self
            .failing
            .read()
            .expect("InMemoryNotifier: failing lock poisoned")
        {
            return Err(DomainError::new(
                ErrorCode::ExternalServiceError,
                "Notification delivery failed",
            ));
        }
        Ok(())
    }
}
