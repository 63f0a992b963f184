//! Razorpay webhook event types.
//!
//! Only the envelope is typed; entity snapshots under `payload` stay as JSON
//! and are read through the accessors below.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::errors::WebhookError;
use crate::domain::foundation::Timestamp;

/// Webhook event envelope as delivered by Razorpay.
///
/// ```json
/// {"event": "subscription.activated",
///  "payload": {"subscription": {"entity": {"id": "sub_123"}}},
///  "created_at": 1704067200}
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookEvent {
    /// Event name (e.g., "subscription.charged").
    pub event: String,

    /// Entity snapshots keyed by entity name ("subscription", "payment").
    #[serde(default)]
    pub payload: Map<String, Value>,

    /// Unix timestamp at which the provider created the event.
    ///
    /// Kept as a raw JSON number: integers and floats are both accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Number>,
}

impl WebhookEvent {
    /// Parses a verified request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, WebhookError> {
        serde_json::from_slice(body).map_err(|e| WebhookError::ParseError(e.to_string()))
    }

    /// Resolves the event name against the known subscription events.
    pub fn kind(&self) -> Option<SubscriptionEventKind> {
        SubscriptionEventKind::parse(&self.event)
    }

    /// Returns `payload.<name>.entity` if present and an object.
    pub fn entity(&self, name: &str) -> Option<&Map<String, Value>> {
        self.payload.get(name)?.get("entity")?.as_object()
    }

    /// Returns `payload.<name>.entity.id` if present and a string.
    pub fn entity_id(&self, name: &str) -> Option<&str> {
        self.entity(name)?.get("id")?.as_str()
    }

    /// Subscription id, if the payload carries a subscription entity.
    pub fn subscription_id(&self) -> Option<&str> {
        self.entity_id("subscription")
    }

    /// Provider creation time, if present and representable.
    pub fn created_at(&self) -> Option<Timestamp> {
        let number = self.created_at.as_ref()?;
        let secs = number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        })?;
        Timestamp::from_unix_secs(secs)
    }

    /// The payload as a JSON value, for collaborators.
    pub fn payload_value(&self) -> Value {
        Value::Object(self.payload.clone())
    }
}

/// Subscription lifecycle events this service registers handlers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionEventKind {
    /// Customer authorised the mandate.
    Authenticated,
    /// First charge succeeded, subscription live.
    Activated,
    /// A recurring charge succeeded.
    Charged,
    Paused,
    Resumed,
    /// A charge failed and the provider is retrying.
    Pending,
    /// Retries exhausted.
    Halted,
    Cancelled,
    /// All billing cycles done.
    Completed,
    /// Plan or quantity changed.
    Updated,
}

impl SubscriptionEventKind {
    /// Every known kind, in registration order.
    pub const ALL: [SubscriptionEventKind; 10] = [
        Self::Authenticated,
        Self::Activated,
        Self::Charged,
        Self::Paused,
        Self::Resumed,
        Self::Pending,
        Self::Halted,
        Self::Cancelled,
        Self::Completed,
        Self::Updated,
    ];

    /// Parse an event name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let kind = match s {
            "subscription.authenticated" => Self::Authenticated,
            "subscription.activated" => Self::Activated,
            "subscription.charged" => Self::Charged,
            "subscription.paused" => Self::Paused,
            "subscription.resumed" => Self::Resumed,
            "subscription.pending" => Self::Pending,
            "subscription.halted" => Self::Halted,
            "subscription.cancelled" => Self::Cancelled,
            "subscription.completed" => Self::Completed,
            "subscription.updated" => Self::Updated,
            _ => return None,
        };
        Some(kind)
    }

    /// Convert to the Razorpay event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticated => "subscription.authenticated",
            Self::Activated => "subscription.activated",
            Self::Charged => "subscription.charged",
            Self::Paused => "subscription.paused",
            Self::Resumed => "subscription.resumed",
            Self::Pending => "subscription.pending",
            Self::Halted => "subscription.halted",
            Self::Cancelled => "subscription.cancelled",
            Self::Completed => "subscription.completed",
            Self::Updated => "subscription.updated",
        }
    }

    /// Acknowledgement message returned by the handler for this kind.
    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Authenticated => "Subscription authenticated successfully",
            Self::Activated => "Subscription activated successfully",
            Self::Charged => "Payment recorded successfully",
            Self::Paused => "Subscription paused successfully",
            Self::Resumed => "Subscription resumed successfully",
            Self::Pending => "Payment retry pending",
            Self::Halted => "Subscription halted successfully",
            Self::Cancelled => "Subscription cancelled successfully",
            Self::Completed => "Subscription completed successfully",
            Self::Updated => "Subscription updated successfully",
        }
    }
}

impl fmt::Display for SubscriptionEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for creating test WebhookEvent instances.
#[cfg(test)]
pub struct WebhookEventBuilder {
    event: String,
    payload: Map<String, Value>,
    created_at: Option<Number>,
}

#[cfg(test)]
impl Default for WebhookEventBuilder {
    fn default() -> Self {
        Self {
            event: "subscription.activated".to_string(),
            payload: Map::new(),
            created_at: Some(Number::from(1_704_067_200_i64)),
        }
    }
}

#[cfg(test)]
impl WebhookEventBuilder {
    pub fn new(event: &str) -> Self {
        Self {
            event: event.to_string(),
            ..Default::default()
        }
    }

    pub fn entity(mut self, name: &str, entity: Value) -> Self {
        self.payload
            .insert(name.to_string(), serde_json::json!({ "entity": entity }));
        self
    }

    pub fn subscription(self, id: &str) -> Self {
        self.entity("subscription", serde_json::json!({ "id": id, "status": "active" }))
    }

    pub fn payment(self, id: &str, amount: i64) -> Self {
        self.entity(
            "payment",
            serde_json::json!({ "id": id, "amount": amount, "currency": "INR" }),
        )
    }

    pub fn build(self) -> WebhookEvent {
        WebhookEvent {
            event: self.event,
            payload: self.payload,
            created_at: self.created_at,
        }
    }
}
