//! CreateSubscriptionHandler - Command handler for starting a Razorpay subscription.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::foundation::Timestamp;
use crate::domain::subscription::{SubscriptionError, SubscriptionRequest};
use crate::ports::{PaymentGateway, Subscription, SubscriptionOptions};

/// Command to create a subscription.
#[derive(Debug, Clone, Default)]
pub struct CreateSubscriptionCommand {
    pub plan_id: Option<String>,
    pub customer_notify: Option<Value>,
    pub notes: Option<Map<String, Value>>,
    /// `Host` header of the originating request.
    pub host: Option<String>,
}

/// Result of subscription creation.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionResult {
    pub subscription: Subscription,
}

/// Site-level values applied to every new subscription.
#[derive(Debug, Clone)]
pub struct SubscriptionDefaults {
    pub company_name: String,
    pub default_host: String,
    pub total_count: u32,
}

/// Handler for creating subscriptions.
///
/// `gateway` is `None` when payment credentials are not configured; every
/// request then fails with [`SubscriptionError::NotConfigured`] before the
/// body is validated.
pub struct CreateSubscriptionHandler {
    gateway: Option<Arc<dyn PaymentGateway>>,
    defaults: SubscriptionDefaults,
}

impl CreateSubscriptionHandler {
    pub fn new(gateway: Option<Arc<dyn PaymentGateway>>, defaults: SubscriptionDefaults) -> Self {
        Self { gateway, defaults }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, SubscriptionError> {
        // 1. Credentials first, matching what the checkout UI expects
        let gateway = self.gateway.as_ref().ok_or_else(|| {
            tracing::error!("Razorpay credentials not configured");
            SubscriptionError::NotConfigured
        })?;

        // 2. Validate request
        let request = SubscriptionRequest::new(cmd.plan_id, cmd.customer_notify, cmd.notes)?;

        let website = cmd
            .host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| self.defaults.default_host.clone());

        let options = SubscriptionOptions {
            plan_id: request.plan_id().to_string(),
            customer_notify: request.customer_notify(),
            total_count: self.defaults.total_count,
            notes: request.notes_with_defaults(
                &self.defaults.company_name,
                &website,
                Timestamp::now(),
            ),
        };

        tracing::info!(
            plan_id = %options.plan_id,
            total_count = options.total_count,
            "Creating subscription"
        );

        // 3. Create with the provider
        let subscription = gateway.create_subscription(options).await.map_err(|e| {
            tracing::error!(
                error = %e,
                provider_code = ?e.provider_code,
                http_status = ?e.http_status,
                "Subscription creation failed"
            );
            SubscriptionError::from(e)
        })?;

        tracing::info!(
            subscription_id = %subscription.id,
            status = %subscription.status,
            "Subscription created"
        );

        Ok(CreateSubscriptionResult { subscription })
    }
}
