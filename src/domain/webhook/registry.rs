//! Event dispatch - maps event names to registered handlers.
//!
//! The registry is built once at startup and shared read-only between
//! requests. Dispatch is total: names without a handler produce an
//! `ignored` outcome instead of an error, so unrelated Razorpay events
//! enabled on the dashboard never fail a delivery.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::errors::WebhookError;
use super::event::{SubscriptionEventKind, WebhookEvent};
use super::handlers::{SubscriptionChargedHandler, SubscriptionStateHandler, WebhookEventHandler};
use super::outcome::HandlerOutcome;
use crate::ports::EventRecorder;

/// Dispatches webhook events to the appropriate handler.
#[async_trait]
pub trait WebhookDispatcher: Send + Sync {
    /// Find a handler for the given event name.
    ///
    /// Returns `None` if no handler is registered for this name.
    fn get_handler(&self, event_name: &str) -> Option<&dyn WebhookEventHandler>;

    /// Dispatch an event to its handler.
    ///
    /// Returns an `ignored` outcome if no handler is registered.
    async fn dispatch(&self, event: &WebhookEvent) -> Result<HandlerOutcome, WebhookError> {
        match self.get_handler(&event.event) {
            Some(handler) => handler.handle(event).await,
            None => {
                tracing::warn!(event = %event.event, "Unhandled webhook event type");
                Ok(HandlerOutcome::ignored(&event.event))
            }
        }
    }
}

/// Registry of handlers keyed by event kind.
#[derive(Default)]
pub struct WebhookHandlerRegistry {
    handlers: HashMap<SubscriptionEventKind, Arc<dyn WebhookEventHandler>>,
}

impl WebhookHandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with a handler for every known subscription event.
    pub fn with_default_handlers(recorder: Arc<dyn EventRecorder>) -> Self {
        let mut registry = Self::new();
        for kind in SubscriptionEventKind::ALL {
            let handler: Arc<dyn WebhookEventHandler> = match kind {
                SubscriptionEventKind::Charged => {
                    Arc::new(SubscriptionChargedHandler::new(recorder.clone()))
                }
                other => Arc::new(SubscriptionStateHandler::new(other, recorder.clone())),
            };
            registry.register(handler);
        }
        registry
    }

    /// Registers a handler under its own kind, replacing any previous one.
    pub fn register(&mut self, handler: Arc<dyn WebhookEventHandler>) -> &mut Self {
        self.handlers.insert(handler.kind(), handler);
        self
    }

    /// Whether a handler is registered for the kind.
    pub fn contains(&self, kind: SubscriptionEventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl WebhookDispatcher for WebhookHandlerRegistry {
    fn get_handler(&self, event_name: &str) -> Option<&dyn WebhookEventHandler> {
        let kind = SubscriptionEventKind::parse(event_name)?;
        self.handlers.get(&kind).map(|h| h.as_ref())
    }
}
