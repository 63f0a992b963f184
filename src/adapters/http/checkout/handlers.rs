//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect Axum routes to the subscription command and query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, ListPlansHandler, SubscriptionDefaults,
};
use crate::domain::subscription::{PlanCatalog, SubscriptionError};
use crate::ports::PaymentGateway;

use super::super::response::ErrorResponse;
use super::dto::{CreateSubscriptionRequest, PlansResponse, SubscriptionResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for checkout endpoints.
#[derive(Clone)]
pub struct CheckoutAppState {
    /// `None` when Razorpay credentials are not configured.
    pub gateway: Option<Arc<dyn PaymentGateway>>,
    pub defaults: SubscriptionDefaults,
    pub key_id: Option<String>,
    pub catalog: PlanCatalog,
}

impl CheckoutAppState {
    pub fn create_subscription_handler(&self) -> CreateSubscriptionHandler {
        CreateSubscriptionHandler::new(self.gateway.clone(), self.defaults.clone())
    }

    pub fn list_plans_handler(&self) -> ListPlansHandler {
        ListPlansHandler::new(
            self.key_id.clone(),
            self.defaults.company_name.clone(),
            self.catalog.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/create-subscription - Create a Razorpay subscription
pub async fn create_subscription(
    State(state): State<CheckoutAppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateSubscriptionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CheckoutApiError> {
    let Json(req) = payload?;

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let cmd = CreateSubscriptionCommand {
        plan_id: req.plan_id,
        customer_notify: req.customer_notify,
        notes: req.notes,
        host,
    };

    let result = state.create_subscription_handler().handle(cmd).await?;

    Ok(Json(SubscriptionResponse::from(result.subscription)))
}

/// GET /api/plans - Public checkout settings
pub async fn list_plans(State(state): State<CheckoutAppState>) -> impl IntoResponse {
    let result = state.list_plans_handler().handle();

    Json(PlansResponse {
        key_id: result.key_id,
        company_name: result.company_name,
        plans: result.plans,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error for checkout endpoints.
#[derive(Debug)]
pub enum CheckoutApiError {
    Subscription(SubscriptionError),
    Body(JsonRejection),
}

impl From<SubscriptionError> for CheckoutApiError {
    fn from(err: SubscriptionError) -> Self {
        Self::Subscription(err)
    }
}

impl From<JsonRejection> for CheckoutApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for CheckoutApiError {
    fn into_response(self) -> Response {
        let err = match self {
            CheckoutApiError::Body(rejection) => {
                return ErrorResponse::new("Invalid request body")
                    .with_message(rejection.body_text())
                    .into_response_with(StatusCode::BAD_REQUEST);
            }
            CheckoutApiError::Subscription(err) => err,
        };

        let status = err.status_code();
        let body = match &err {
            SubscriptionError::NotConfigured => ErrorResponse::new("Configuration error")
                .with_message("Payment system not properly configured"),
            SubscriptionError::MissingPlanId => ErrorResponse::new("Missing plan_id")
                .with_message("Plan ID is required to create subscription"),
            SubscriptionError::InvalidField { .. } => {
                ErrorResponse::new("Invalid request").with_message(err.to_string())
            }
            SubscriptionError::Provider(payment) => ErrorResponse::new("Razorpay API Error")
                .with_message(payment.message.clone())
                .with_code(
                    payment
                        .provider_code
                        .clone()
                        .unwrap_or_else(|| "UNKNOWN_ERROR".to_string()),
                )
                .with_details(payment.details.clone()),
            SubscriptionError::Gateway(_) => ErrorResponse::new("Internal server error")
                .with_message("Failed to create subscription. Please try again.")
                .timestamped(),
        };

        body.into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PaymentError;

    #[test]
    fn not_configured_is_500() {
        let response = CheckoutApiError::from(SubscriptionError::NotConfigured).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_plan_is_400() {
        let response = CheckoutApiError::from(SubscriptionError::MissingPlanId).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn provider_error_keeps_provider_status() {
        let err = PaymentError::provider("The id provided does not exist")
            .with_http_status(404)
            .with_provider_code("BAD_REQUEST_ERROR");

        let response = CheckoutApiError::from(SubscriptionError::Provider(err)).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn gateway_error_is_500() {
        let err = PaymentError::network("connection reset");
        let response = CheckoutApiError::from(SubscriptionError::Gateway(err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
