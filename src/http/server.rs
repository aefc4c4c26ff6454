//! Router construction, shared state and the serve loop.

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use crate::nutrition::FoodLookup;
use crate::store::FoodStore;
use crate::tools::status::StatusTracker;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub lookup: FoodLookup,
    pub status_tracker: Arc<StatusTracker>,
}

impl AppState {
    pub fn new(store: Arc<dyn FoodStore>, database_path: PathBuf) -> Self {
        Self {
            lookup: FoodLookup::new(store),
            status_tracker: Arc::new(StatusTracker::new(database_path)),
        }
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/calculate-macros", post(handlers::calculate_macros))
        .route("/v1/status", get(handlers::status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl-C
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
