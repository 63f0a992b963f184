//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for unit
//! and integration tests. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Call tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::ports::{PaymentError, PaymentGateway, Subscription, SubscriptionOptions};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
///
/// // Inject errors
/// mock.set_error(PaymentError::network("Test outage"));
///
/// // Use in tests
/// let result = mock.create_subscription(options).await;
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Next subscription to return.
    next_subscription: Option<Subscription>,

    /// Error to return on next call.
    next_error: Option<PaymentError>,

    /// Options received, in call order.
    calls: Vec<SubscriptionOptions>,
}

impl MockPaymentGateway {
    /// Create a new mock gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this subscription from the next call.
    pub fn set_subscription(&self, subscription: Subscription) {
        self.lock().next_subscription = Some(subscription);
    }

    /// Fail the next call with this error.
    pub fn set_error(&self, error: PaymentError) {
        self.lock().next_error = Some(error);
    }

    /// Options passed to every call so far.
    pub fn calls(&self) -> Vec<SubscriptionOptions> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_subscription(
        &self,
        options: SubscriptionOptions,
    ) -> Result<Subscription, PaymentError> {
        let mut state = self.lock();
        state.calls.push(options.clone());

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        if let Some(subscription) = state.next_subscription.take() {
            return Ok(subscription);
        }

        Ok(Subscription {
            id: format!("sub_mock_{}", state.calls.len()),
            status: "created".to_string(),
            plan_id: options.plan_id,
            customer_notify: json!(options.customer_notify == 1),
            created_at: chrono::Utc::now().timestamp(),
            notes: Value::Object(options.notes),
        })
    }
}
