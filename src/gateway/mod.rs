//! HTTP Gateway
//!
//! Axum router over the account validator, the transfer coordinator and the
//! callback handler.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the complete router
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/validate-account", post(handlers::validate_account))
        .route("/create-transfer", post(handlers::create_transfer))
        .route("/transfer-callback", post(handlers::transfer_callback))
        .route("/transfers/{id}", get(handlers::get_transfer))
        .route("/health", get(handlers::health_check))
        .route("/ping-db", get(handlers::ping_db));

    Router::new()
        .nest("/api/v1", api_routes)
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Serve until Ctrl-C
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {} (port in use?)", addr))?;

    info!(addr = %addr, "Gateway listening");
    info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
