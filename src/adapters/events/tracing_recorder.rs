//! Event recorder that writes accepted events to the log.
//!
//! Default production recorder until a database adapter exists. Only the
//! event name and top-level payload keys are logged, so contact messages
//! and customer details stay out of the log stream.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::foundation::DomainError;
use crate::ports::EventRecorder;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventRecorder;

impl TracingEventRecorder {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventRecorder for TracingEventRecorder {
    async fn save(&self, event: &str, payload: &Value) -> Result<(), DomainError> {
        let keys: Vec<&str> = payload
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();

        tracing::info!(event = %event, payload_keys = ?keys, "Event recorded");
        Ok(())
    }
}
