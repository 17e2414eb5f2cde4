//! HTTP boundary for the sshbox provisioning service.
//!
//! This crate wires the provisioning core behind an axum router. The core
//! returns tagged error values; this layer owns the explicit error-kind to
//! status-code mapping and never leaks a raw error through as a 200.
//!
//! ## Endpoints
//!
//! - `POST /v1/sandboxes` - Provision a sandbox
//! - `GET /health` - Health check

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use sshbox_core::SandboxProvisioner;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The provisioning orchestrator
    pub provisioner: Arc<SandboxProvisioner>,
}

/// Build the HTTP router for the provisioning service.
pub fn build_router(state: AppState) -> Router {
    tracing::debug!("Building HTTP router");

    Router::new()
        .route("/v1/sandboxes", post(routes::create_sandbox))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// Runs until the provided shutdown future resolves.
pub async fn serve(
    state: AppState,
    addr: std::net::SocketAddr,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let router = build_router(state);

    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
