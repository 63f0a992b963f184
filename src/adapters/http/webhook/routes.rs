//! Axum router configuration for the webhook endpoint.

use axum::{routing::post, Router};

use super::handlers::{receive_webhook, webhook_method_not_allowed, WebhookAppState};

/// Create the webhook router.
///
/// # Routes
/// - `POST /api/webhook` - Razorpay webhook receiver (signature verified)
/// - any other method - 405
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new().route(
        "/api/webhook",
        post(receive_webhook).fallback(webhook_method_not_allowed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::events::InMemoryEventRecorder;
    use crate::adapters::notification::InMemoryNotifier;
    use crate::domain::webhook::{
        compute_signature, WebhookHandlerRegistry, WebhookSignatureVerifier, SIGNATURE_HEADER,
    };

    const SECRET: &str = "router_test_secret";

    fn state(secret: Option<&str>) -> WebhookAppState {
        WebhookAppState {
            verifier: secret
                .and_then(|s| WebhookSignatureVerifier::new(SecretString::new(s.to_string())).ok()),
            dispatcher: Arc::new(WebhookHandlerRegistry::with_default_handlers(Arc::new(
                InMemoryEventRecorder::new(),
            ))),
            notifier: Arc::new(InMemoryNotifier::new()),
        }
    }

    fn app(secret: Option<&str>) -> Router {
        webhook_routes().with_state(state(secret))
    }

    fn signed_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/webhook")
            .header("content-type", "application/json")
            .header(SIGNATURE_HEADER, compute_signature(SECRET.as_bytes(), body.as_bytes()))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn webhook_routes_creates_router() {
        let _: Router<()> = webhook_routes().with_state(state(Some(SECRET)));
    }

    #[tokio::test]
    async fn signed_activation_is_acknowledged() {
        let body = r#"{"event":"subscription.activated","payload":{"subscription":{"entity":{"id":"sub_123"}}},"created_at":1704067200}"#;

        let response = app(Some(SECRET)).oneshot(signed_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["received"], true);
        assert_eq!(json["status"], "processed");
        assert_eq!(json["result"]["subscription_id"], "sub_123");
    }

    #[tokio::test]
    async fn get_is_method_not_allowed() {
        let request = Request::builder()
            .method("GET")
            .uri("/api/webhook")
            .body(Body::empty())
            .unwrap();

        let response = app(Some(SECRET)).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json_body(response).await, json!({ "error": "Method not allowed" }));
    }

    #[tokio::test]
    async fn missing_secret_is_configuration_error() {
        let body = r#"{"event":"subscription.activated"}"#;

        let response = app(None).oneshot(signed_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Webhook secret not configured");
        assert!(json["message"].is_string());
    }
}
