//! HTTP DTOs for the checkout endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::subscription::PlanCatalog;
use crate::ports::Subscription;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a hosted subscription.
///
/// Every field is optional at the wire level; presence is checked by the
/// application layer so a missing plan id gets its own error body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSubscriptionRequest {
    #[serde(default)]
    pub plan_id: Option<String>,
    /// `true`/`false` or `1`/`0`. Defaults to 1.
    #[serde(default)]
    pub customer_notify: Option<Value>,
    #[serde(default)]
    pub notes: Option<Map<String, Value>>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Subscription created at Razorpay.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub success: bool,
    pub subscription_id: String,
    /// Provider status, relayed verbatim.
    pub status: String,
    pub plan_id: String,
    pub customer_notify: Value,
    /// Unix seconds as reported by Razorpay.
    pub created_at: i64,
    pub notes: Value,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(sub: Subscription) -> Self {
        Self {
            success: true,
            subscription_id: sub.id,
            status: sub.status,
            plan_id: sub.plan_id,
            customer_notify: sub.customer_notify,
            created_at: sub.created_at,
            notes: sub.notes,
        }
    }
}

/// Public checkout settings for the pricing page.
#[derive(Debug, Clone, Serialize)]
pub struct PlansResponse {
    /// Publishable key id. Never the secret.
    pub key_id: Option<String>,
    pub company_name: String,
    pub plans: PlanCatalog,
}
