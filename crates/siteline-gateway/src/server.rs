// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use siteline_core::SitelineError;
use siteline_mailer::Mailer;
use siteline_storage::Database;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (cheap to clone, single background writer).
    pub db: Database,
    /// Email-sending collaborator for the contact pipeline.
    pub mailer: Arc<dyn Mailer>,
    /// Duplicate-submission window in seconds.
    pub duplicate_window_secs: u64,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

/// Gateway server configuration (mirrors `ServerConfig` from siteline-config
/// to avoid a dependency on the config crate from the gateway crate).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Assemble the router:
/// - POST /api/contact
/// - GET /api/products
/// - GET /health
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(handlers::post_contact))
        .route("/api/products", get(handlers::get_products))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves until a ctrl-c signal
/// arrives, then drains in-flight requests.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), SitelineError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SitelineError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SitelineError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "failed to install ctrl-c handler"),
    }
}
