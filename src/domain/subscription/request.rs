//! Validated subscription creation request.

use serde_json::{Map, Value};

use super::errors::SubscriptionError;
use crate::domain::foundation::Timestamp;

/// Customer notification flag sent to the provider when the caller omits it.
pub const DEFAULT_CUSTOMER_NOTIFY: u8 = 1;

/// A request to start a subscription on a provider plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionRequest {
    plan_id: String,
    customer_notify: u8,
    notes: Map<String, Value>,
}

impl SubscriptionRequest {
    /// Validates raw request fields.
    ///
    /// `customer_notify` accepts `0`/`1` or a boolean; absent or null means
    /// [`DEFAULT_CUSTOMER_NOTIFY`].
    pub fn new(
        plan_id: Option<String>,
        customer_notify: Option<Value>,
        notes: Option<Map<String, Value>>,
    ) -> Result<Self, SubscriptionError> {
        let plan_id = plan_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or(SubscriptionError::MissingPlanId)?;

        Ok(Self {
            plan_id,
            customer_notify: parse_customer_notify(customer_notify)?,
            notes: notes.unwrap_or_default(),
        })
    }

    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    pub fn customer_notify(&self) -> u8 {
        self.customer_notify
    }

    pub fn notes(&self) -> &Map<String, Value> {
        &self.notes
    }

    /// Notes attached to the provider subscription.
    ///
    /// Starts from `created_by`, `website` and `timestamp`; caller notes are
    /// layered on top and win on key collisions.
    pub fn notes_with_defaults(
        &self,
        company_name: &str,
        website: &str,
        now: Timestamp,
    ) -> Map<String, Value> {
        let mut notes = Map::new();
        notes.insert(
            "created_by".to_string(),
            Value::String(format!("{} Website", company_name)),
        );
        notes.insert("website".to_string(), Value::String(website.to_string()));
        notes.insert("timestamp".to_string(), Value::String(now.to_iso8601()));
        for (key, value) in &self.notes {
            notes.insert(key.clone(), value.clone());
        }
        notes
    }
}

fn parse_customer_notify(value: Option<Value>) -> Result<u8, SubscriptionError> {
    match value {
        None | Some(Value::Null) => Ok(DEFAULT_CUSTOMER_NOTIFY),
        Some(Value::Bool(flag)) => Ok(u8::from(flag)),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(0) => Ok(0),
            Some(1) => Ok(1),
            _ => Err(SubscriptionError::invalid_field(
                "customer_notify",
                "must be 0 or 1",
            )),
        },
        Some(_) => Err(SubscriptionError::invalid_field(
            "customer_notify",
            "must be 0 or 1",
        )),
    }
}
