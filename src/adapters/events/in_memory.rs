//! In-memory event recorder for testing.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in production.
//! It uses `.expect()` on lock operations which will panic if locks are poisoned.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::EventRecorder;

/// A recorded event.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub event: String,
    pub payload: Value,
}

/// In-memory event recorder for testing.
///
/// Captures every saved event for assertions and can be switched into a
/// failing mode to exercise error paths.
///
/// # Example
///
/// ```ignore
/// let recorder = Arc::new(InMemoryEventRecorder::new());
///
/// recorder.save("subscription.activated", &payload).await?;
///
/// assert_eq!(recorder.event_count(), 1);
/// assert!(recorder.has_event("subscription.activated"));
/// ```
#[derive(Default)]
pub struct InMemoryEventRecorder {
    recorded: RwLock<Vec<RecordedEvent>>,
    failing: RwLock<bool>,
}

impl InMemoryEventRecorder {
    /// Creates a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns all recorded events.
    pub fn recorded_events(&self) -> Vec<RecordedEvent> {
        self.recorded
            .read()
            .expect("InMemoryEventRecorder: recorded lock poisoned")
            .clone()
    }

    /// Returns count of recorded events.
    pub fn event_count(&self) -> usize {
        self.recorded
            .read()
            .expect("InMemoryEventRecorder: recorded lock poisoned")
            .len()
    }

    /// Checks if an event with this name was recorded.
    pub fn has_event(&self, event: &str) -> bool {
        self.recorded_events().iter().any(|e| e.event == event)
    }

    /// Makes every subsequent `save` fail.
    pub fn fail_saves(&self, failing: bool) {
        *self
            .failing
            .write()
            .expect("InMemoryEventRecorder: failing lock poisoned") = failing;
    }
}

#[async_trait]
impl EventRecorder for InMemoryEventRecorder {
    async fn save(&self, event: &str, payload: &Value) -> Result<(), DomainError> {
        if *self
            .failing
            .read()
            .expect("InMemoryEventRecorder: failing lock poisoned")
        {
            return Err(DomainError::new(
                ErrorCode::Unavailable,
                "Event store unavailable",
            ));
        }

        self.recorded
            .write()
            .expect("InMemoryEventRecorder: recorded lock poisoned")
            .push(RecordedEvent {
                event: event.to_string(),
                payload: payload.clone(),
            });
        Ok(())
    }
}
