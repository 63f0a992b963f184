//! PixelPerfect Checkout server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pixelperfect_checkout::adapters::{api_router, AppState, TracingEventRecorder, TracingNotifier};
use pixelperfect_checkout::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    if config.payment.webhook_secret().is_none() {
        tracing::warn!("Webhook secret not configured; /api/webhook will answer 500");
    }
    if config.payment.credentials().is_none() {
        tracing::warn!("Razorpay credentials not configured; subscription creation is disabled");
    }

    let state = AppState::from_config(
        &config,
        Arc::new(TracingEventRecorder::new()),
        Arc::new(TracingNotifier::new()),
    );
    let app = api_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!(error = %e, %addr, "Failed to bind");
        e
    })?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        test_mode = config.payment.is_test_mode(),
        "Checkout server listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_filter()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
