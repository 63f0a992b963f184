//! Subscription lifecycle event handlers.
//!
//! Each handler reads the entity ids it needs from the payload, hands the
//! event to the [`EventRecorder`] extension point, and returns a small
//! [`HandlerOutcome`]. Access changes, receipts and emails belong behind
//! the recorder; nothing here mutates state.

use std::sync::Arc;

use async_trait::async_trait;

use super::errors::WebhookError;
use super::event::{SubscriptionEventKind, WebhookEvent};
use super::outcome::HandlerOutcome;
use crate::ports::EventRecorder;

/// Handler for one kind of webhook event.
///
/// Implementations should be stateless apart from their collaborators.
#[async_trait]
pub trait WebhookEventHandler: Send + Sync {
    /// The event kind this handler processes.
    fn kind(&self) -> SubscriptionEventKind;

    /// Handles the webhook event.
    ///
    /// Returns `Err` when the payload lacks the entity the handler needs or a
    /// collaborator fails.
    async fn handle(&self, event: &WebhookEvent) -> Result<HandlerOutcome, WebhookError>;
}

/// Handles every subscription event whose result is keyed by subscription id.
///
/// One instance per kind: authenticated, activated, paused, resumed, pending,
/// halted, cancelled, completed, updated.
pub struct SubscriptionStateHandler {
    kind: SubscriptionEventKind,
    recorder: Arc<dyn EventRecorder>,
}

impl SubscriptionStateHandler {
    pub fn new(kind: SubscriptionEventKind, recorder: Arc<dyn EventRecorder>) -> Self {
        Self { kind, recorder }
    }
}

#[async_trait]
impl WebhookEventHandler for SubscriptionStateHandler {
    fn kind(&self) -> SubscriptionEventKind {
        self.kind
    }

    async fn handle(&self, event: &WebhookEvent) -> Result<HandlerOutcome, WebhookError> {
        let subscription_id = event
            .subscription_id()
            .ok_or(WebhookError::MissingField("subscription.entity.id"))?;

        tracing::info!(
            event = %self.kind,
            subscription_id = %subscription_id,
            "Subscription lifecycle event"
        );

        record(self.recorder.as_ref(), self.kind, event).await?;

        Ok(HandlerOutcome::success(self.kind.success_message())
            .with_subscription_id(subscription_id))
    }
}

/// Handles `subscription.charged`: a recurring payment succeeded.
pub struct SubscriptionChargedHandler {
    recorder: Arc<dyn EventRecorder>,
}

impl SubscriptionChargedHandler {
    pub fn new(recorder: Arc<dyn EventRecorder>) -> Self {
        Self { recorder }
    }
}

#[async_trait]
impl WebhookEventHandler for SubscriptionChargedHandler {
    fn kind(&self) -> SubscriptionEventKind {
        SubscriptionEventKind::Charged
    }

    async fn handle(&self, event: &WebhookEvent) -> Result<HandlerOutcome, WebhookError> {
        let payment = event
            .entity("payment")
            .ok_or(WebhookError::MissingField("payment.entity"))?;
        let payment_id = payment
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or(WebhookError::MissingField("payment.entity.id"))?;
        let amount_paise = payment
            .get("amount")
            .and_then(|v| v.as_f64())
            .ok_or(WebhookError::MissingField("payment.entity.amount"))?;
        let subscription_id = event
            .subscription_id()
            .ok_or(WebhookError::MissingField("subscription.entity.id"))?;

        let amount = amount_paise / 100.0;

        tracing::info!(
            payment_id = %payment_id,
            subscription_id = %subscription_id,
            amount,
            "Subscription payment received"
        );

        record(self.recorder.as_ref(), SubscriptionEventKind::Charged, event).await?;

        Ok(HandlerOutcome::success(SubscriptionEventKind::Charged.success_message())
            .with_payment(payment_id, amount))
    }
}

async fn record(
    recorder: &dyn EventRecorder,
    kind: SubscriptionEventKind,
    event: &WebhookEvent,
) -> Result<(), WebhookError> {
    recorder
        .save(kind.as_str(), &event.payload_value())
        .await
        .map_err(|e| WebhookError::Handler(e.to_string()))
}
