//! ProcessWebhookHandler - Command handler for Razorpay webhook deliveries.

use std::sync::Arc;

use serde_json::json;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;
use crate::domain::webhook::{
    WebhookAcknowledgement, WebhookDispatcher, WebhookError, WebhookEvent,
    WebhookSignatureVerifier,
};
use crate::ports::{NotificationKind, Notifier};

/// Command to process one webhook delivery.
#[derive(Debug, Clone)]
pub struct ProcessWebhookCommand {
    /// Raw request body, exactly as received.
    pub payload: Vec<u8>,
    /// `X-Razorpay-Signature` header value, if sent.
    pub signature: Option<String>,
}

/// Handler for processing webhook deliveries.
///
/// Verifies the body signature before anything else, then parses the event
/// and dispatches it. Handler-side failures trigger a best-effort operator
/// notification; the notification's own failure is logged and dropped.
pub struct ProcessWebhookHandler {
    verifier: Option<WebhookSignatureVerifier>,
    dispatcher: Arc<dyn WebhookDispatcher>,
    notifier: Arc<dyn Notifier>,
}

impl ProcessWebhookHandler {
    /// `verifier` is `None` when no webhook secret is configured; every
    /// delivery then fails with [`WebhookError::SecretNotConfigured`].
    pub fn new(
        verifier: Option<WebhookSignatureVerifier>,
        dispatcher: Arc<dyn WebhookDispatcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            verifier,
            dispatcher,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessWebhookCommand,
    ) -> Result<WebhookAcknowledgement, WebhookError> {
        let delivery_id = Uuid::new_v4();
        let span = tracing::info_span!("webhook_delivery", %delivery_id);
        self.process(cmd).instrument(span).await
    }

    async fn process(
        &self,
        cmd: ProcessWebhookCommand,
    ) -> Result<WebhookAcknowledgement, WebhookError> {
        // 1. Fail closed without a secret
        let verifier = self.verifier.as_ref().ok_or_else(|| {
            tracing::error!("Webhook secret not configured");
            WebhookError::SecretNotConfigured
        })?;

        // 2. Verify signature over the raw body
        if let Err(err) = verifier.verify_header(&cmd.payload, cmd.signature.as_deref()) {
            tracing::warn!(
                signature_present = cmd.signature.is_some(),
                "Invalid webhook signature"
            );
            return Err(err);
        }

        // 3. Parse and dispatch
        let event = match WebhookEvent::from_slice(&cmd.payload) {
            Ok(event) => event,
            Err(err) => {
                self.report_failure(&err, None).await;
                return Err(err);
            }
        };

        tracing::info!(
            event = %event.event,
            created_at = ?event.created_at(),
            "Webhook received"
        );

        match self.dispatcher.dispatch(&event).await {
            Ok(outcome) => Ok(WebhookAcknowledgement::processed(event.event, outcome)),
            Err(err) => {
                self.report_failure(&err, Some(&event)).await;
                Err(err)
            }
        }
    }

    async fn report_failure(&self, err: &WebhookError, event: Option<&WebhookEvent>) {
        let event_name = event.map(|e| e.event.as_str());
        let subscription_id = event.and_then(WebhookEvent::subscription_id);

        tracing::error!(
            error = %err,
            event = ?event_name,
            subscription_id = ?subscription_id,
            "Webhook processing failed"
        );

        if !err.should_notify() {
            return;
        }

        let data = json!({
            "error": err.to_string(),
            "event": event_name,
            "subscription_id": subscription_id,
            "timestamp": Timestamp::now(),
        });

        if let Err(notify_err) = self.notifier.notify(NotificationKind::WebhookError, data).await {
            tracing::warn!(error = %notify_err, "Failed to send webhook error notification");
        }
    }
}
