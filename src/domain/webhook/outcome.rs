//! Handler results and the webhook acknowledgement body.

use serde::Serialize;

use crate::domain::foundation::Timestamp;

/// Whether a handler acted on the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Ignored,
}

/// Result record returned by a webhook event handler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandlerOutcome {
    pub status: OutcomeStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    /// Charged amount in major currency units (rupees, not paise).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl HandlerOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Success,
            message: message.into(),
            subscription_id: None,
            payment_id: None,
            amount: None,
        }
    }

    /// Outcome for an event name with no registered handler.
    pub fn ignored(event_name: &str) -> Self {
        Self {
            status: OutcomeStatus::Ignored,
            message: format!("Event {} received but not handled", event_name),
            subscription_id: None,
            payment_id: None,
            amount: None,
        }
    }

    pub fn with_subscription_id(mut self, id: impl Into<String>) -> Self {
        self.subscription_id = Some(id.into());
        self
    }

    pub fn with_payment(mut self, id: impl Into<String>, amount: f64) -> Self {
        self.payment_id = Some(id.into());
        self.amount = Some(amount);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}

/// Body of a successful webhook response.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAcknowledgement {
    pub received: bool,
    pub event: String,
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub result: HandlerOutcome,
}

impl WebhookAcknowledgement {
    pub fn processed(event: impl Into<String>, result: HandlerOutcome) -> Self {
        Self {
            received: true,
            event: event.into(),
            status: "processed",
            timestamp: Timestamp::now(),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_outcome_serializes_without_empty_fields() {
        let outcome = HandlerOutcome::success("Subscription paused successfully")
            .with_subscription_id("sub_9");

        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            json,
            json!({
                "status": "success",
                "message": "Subscription paused successfully",
                "subscription_id": "sub_9"
            })
        );
    }

    #[test]
    fn charged_outcome_carries_payment_and_amount() {
        let outcome = HandlerOutcome::success("Payment recorded successfully")
            .with_payment("pay_1", 49.0);

        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["payment_id"], "pay_1");
        assert_eq!(json["amount"], 49.0);
        assert!(json.get("subscription_id").is_none());
    }

    #[test]
    fn ignored_outcome_names_the_event() {
        let outcome = HandlerOutcome::ignored("payment.captured");

        assert_eq!(outcome.status, OutcomeStatus::Ignored);
        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Event payment.captured received but not handled");
    }

    #[test]
    fn acknowledgement_has_processed_shape() {
        let ack = WebhookAcknowledgement::processed(
            "subscription.activated",
            HandlerOutcome::success("ok").with_subscription_id("sub_123"),
        );

        let json = serde_json::to_value(&ack).unwrap();

        assert_eq!(json["received"], true);
        assert_eq!(json["event"], "subscription.activated");
        assert_eq!(json["status"], "processed");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(json["result"]["subscription_id"], "sub_123");
    }
}
