//! Top-level API router.
//!
//! Builds each feature's state from configuration, merges the feature
//! routers and applies the shared tower-http layers.

use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::razorpay::{RazorpayConfig, RazorpayPaymentAdapter};
use crate::application::handlers::subscription::SubscriptionDefaults;
use crate::config::{AppConfig, ServerConfig};
use crate::domain::webhook::{WebhookHandlerRegistry, WebhookSignatureVerifier};
use crate::ports::{EventRecorder, Notifier, PaymentGateway};

use super::checkout::{checkout_routes, CheckoutAppState};
use super::contact::{contact_routes, ContactAppState};
use super::webhook::{webhook_routes, WebhookAppState};

/// State for every feature router.
#[derive(Clone)]
pub struct AppState {
    pub webhook: WebhookAppState,
    pub checkout: CheckoutAppState,
    pub contact: ContactAppState,
}

impl AppState {
    /// Wires adapters from configuration.
    ///
    /// Missing Razorpay credentials or webhook secret leave the matching
    /// endpoint answering with a configuration error instead of failing here.
    pub fn from_config(
        config: &AppConfig,
        recorder: Arc<dyn EventRecorder>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let verifier = WebhookSignatureVerifier::from_config(config.payment.webhook_secret()).ok();
        let dispatcher = Arc::new(WebhookHandlerRegistry::with_default_handlers(recorder.clone()));

        let gateway = RazorpayConfig::from_payment_config(&config.payment).map(|razorpay| {
            Arc::new(RazorpayPaymentAdapter::new(razorpay)) as Arc<dyn PaymentGateway>
        });

        let defaults = SubscriptionDefaults {
            company_name: config.site.company_name.clone(),
            default_host: config.site.default_host.clone(),
            total_count: config.payment.total_count,
        };

        Self {
            webhook: WebhookAppState {
                verifier,
                dispatcher,
                notifier: notifier.clone(),
            },
            checkout: CheckoutAppState {
                gateway,
                defaults,
                key_id: config.payment.key_id.clone().filter(|k| !k.is_empty()),
                catalog: config.plans.catalog(),
            },
            contact: ContactAppState { recorder, notifier },
        }
    }
}

/// Build the full API router with tracing, timeout and CORS layers.
///
/// CORS covers the browser-facing checkout and contact routes only. The
/// webhook is called server-to-server and answers every non-POST with 405.
pub fn api_router(state: AppState, server: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let browser_routes = Router::new()
        .merge(checkout_routes().with_state(state.checkout))
        .merge(contact_routes().with_state(state.contact))
        .layer(cors);

    Router::new()
        .merge(webhook_routes().with_state(state.webhook))
        .merge(browser_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(server.request_timeout())),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::adapters::events::InMemoryEventRecorder;
    use crate::adapters::notification::InMemoryNotifier;
    use crate::config::PlanSettings;
    use crate::domain::webhook::{compute_signature, SIGNATURE_HEADER};

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.payment.key_id = Some("rzp_test_abc".to_string());
        config.payment.key_secret = Some(SecretString::new("secret".to_string()));
        config.payment.webhook_secret = Some(SecretString::new("whsec".to_string()));
        config.plans.monthly = PlanSettings {
            plan_id: Some("plan_monthly".to_string()),
            ..PlanSettings::default()
        };
        config
    }

    fn app(config: &AppConfig) -> Router {
        let state = AppState::from_config(
            config,
            Arc::new(InMemoryEventRecorder::new()),
            Arc::new(InMemoryNotifier::new()),
        );
        api_router(state, &config.server)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn state_without_credentials_has_no_gateway() {
        let state = AppState::from_config(
            &AppConfig::default(),
            Arc::new(InMemoryEventRecorder::new()),
            Arc::new(InMemoryNotifier::new()),
        );

        assert!(state.checkout.gateway.is_none());
        assert!(state.webhook.verifier.is_none());
        assert!(state.checkout.key_id.is_none());
    }

    #[test]
    fn state_with_credentials_has_gateway_and_verifier() {
        let state = AppState::from_config(
            &config(),
            Arc::new(InMemoryEventRecorder::new()),
            Arc::new(InMemoryNotifier::new()),
        );

        assert!(state.checkout.gateway.is_some());
        assert!(state.webhook.verifier.is_some());
        assert_eq!(state.checkout.catalog.len(), 1);
    }

    #[tokio::test]
    async fn routes_all_endpoints() {
        let config = config();
        let body = r#"{"event":"payment.authorized"}"#;

        let webhook = Request::builder()
            .method("POST")
            .uri("/api/webhook")
            .header(SIGNATURE_HEADER, compute_signature(b"whsec", body.as_bytes()))
            .body(Body::from(body))
            .unwrap();
        let response = app(&config).oneshot(webhook).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["result"]["status"], "ignored");

        let plans = Request::builder()
            .uri("/api/plans")
            .body(Body::empty())
            .unwrap();
        let response = app(&config).oneshot(plans).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["key_id"], "rzp_test_abc");
    }

    #[tokio::test]
    async fn unknown_path_is_404() {
        let request = Request::builder()
            .uri("/api/payment-confirmation")
            .body(Body::empty())
            .unwrap();

        let response = app(&config()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn preflight(uri: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .header("origin", "https://example.com")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn cors_preflight_is_answered_for_checkout() {
        let response = app(&config())
            .oneshot(preflight("/api/create-subscription"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[tokio::test]
    async fn webhook_preflight_is_method_not_allowed() {
        let response = app(&config()).oneshot(preflight("/api/webhook")).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "error": "Method not allowed" })
        );
    }
}
