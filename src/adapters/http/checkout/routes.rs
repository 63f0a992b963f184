//! Axum router configuration for checkout endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::super::response::{options_ok, post_only};
use super::handlers::{create_subscription, list_plans, CheckoutAppState};

/// Create the checkout router.
///
/// # Routes
/// - `POST /api/create-subscription` - Create a hosted subscription
/// - `GET /api/plans` - Publishable key and plan catalog
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new()
        .route(
            "/api/create-subscription",
            post(create_subscription)
                .options(options_ok)
                .fallback(post_only),
        )
        .route("/api/plans", get(list_plans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::razorpay::MockPaymentGateway;
    use crate::application::handlers::subscription::SubscriptionDefaults;
    use crate::domain::subscription::{Plan, PlanCatalog, PlanKind};
    use crate::ports::PaymentError;

    fn defaults() -> SubscriptionDefaults {
        SubscriptionDefaults {
            company_name: "PixelPerfect Graphix".to_string(),
            default_host: "pixelperfectgraphix.vercel.app".to_string(),
            total_count: 12,
        }
    }

    fn state(gateway: Option<MockPaymentGateway>) -> CheckoutAppState {
        CheckoutAppState {
            gateway: gateway.map(|g| Arc::new(g) as Arc<dyn crate::ports::PaymentGateway>),
            defaults: defaults(),
            key_id: Some("rzp_test_abc".to_string()),
            catalog: PlanCatalog::new([Plan {
                kind: PlanKind::Monthly,
                plan_id: "plan_monthly".to_string(),
                name: "Monthly".to_string(),
                description: "Billed monthly".to_string(),
                amount: 4900,
            }]),
        }
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("host", "shop.example.com")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn creates_subscription_with_host_as_website() {
        let gateway = MockPaymentGateway::new();
        let app = checkout_routes().with_state(state(Some(gateway.clone())));

        let response = app
            .oneshot(post_json(
                "/api/create-subscription",
                r#"{"plan_id":"plan_monthly"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["success"], true);
        assert!(json["subscription_id"].as_str().unwrap().starts_with("sub_mock_"));

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].notes["website"], "shop.example.com");
        assert_eq!(calls[0].total_count, 12);
    }

    #[tokio::test]
    async fn missing_plan_id_is_400() {
        let app = checkout_routes().with_state(state(Some(MockPaymentGateway::new())));

        let response = app
            .oneshot(post_json("/api/create-subscription", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Missing plan_id");
    }

    #[tokio::test]
    async fn unconfigured_gateway_is_500() {
        let app = checkout_routes().with_state(state(None));

        let response = app
            .oneshot(post_json(
                "/api/create-subscription",
                r#"{"plan_id":"plan_monthly"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Configuration error");
        assert_eq!(json["message"], "Payment system not properly configured");
    }

    #[tokio::test]
    async fn provider_error_is_relayed() {
        let gateway = MockPaymentGateway::new();
        gateway.set_error(
            PaymentError::provider("The id provided does not exist")
                .with_http_status(400)
                .with_provider_code("BAD_REQUEST_ERROR")
                .with_details(json!({ "code": "BAD_REQUEST_ERROR" })),
        );
        let app = checkout_routes().with_state(state(Some(gateway)));

        let response = app
            .oneshot(post_json(
                "/api/create-subscription",
                r#"{"plan_id":"plan_nope"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Razorpay API Error");
        assert_eq!(json["message"], "The id provided does not exist");
        assert_eq!(json["code"], "BAD_REQUEST_ERROR");
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let app = checkout_routes().with_state(state(Some(MockPaymentGateway::new())));

        let response = app
            .oneshot(post_json("/api/create-subscription", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn get_on_create_subscription_is_405() {
        let app = checkout_routes().with_state(state(None));
        let request = Request::builder()
            .method("GET")
            .uri("/api/create-subscription")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json = json_body(response).await;
        assert_eq!(json["message"], "Only POST requests are allowed");
    }

    #[tokio::test]
    async fn options_is_ok() {
        let app = checkout_routes().with_state(state(None));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/create-subscription")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn plans_lists_key_and_catalog() {
        let app = checkout_routes().with_state(state(None));
        let request = Request::builder()
            .uri("/api/plans")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["key_id"], "rzp_test_abc");
        assert_eq!(json["company_name"], "PixelPerfect Graphix");
        assert_eq!(json["plans"][0]["plan_id"], "plan_monthly");
        assert_eq!(json["plans"][0]["amount"], 4900);
    }
}
