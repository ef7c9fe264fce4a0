//! HTTP trigger surface.
//!
//! One POST endpoint kicks off a full mirror run and answers with the
//! aggregated report once the run terminates.

use crate::config::Config;
use crate::error::DamSyncError;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

pub mod error_response;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Create the router with all route definitions.
///
/// - `POST /download` - fetch a manifest and mirror every asset it lists
/// - `GET /health` - health check
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/download", post(routes::trigger_download))
        .route("/health", get(routes::health_check))
        .with_state(state)
}

/// Bind the configured address and serve the trigger API until shutdown.
pub async fn serve(config: Arc<Config>) -> Result<(), DamSyncError> {
    let state = AppState::new(config.clone());
    let router = create_router(state);

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %config.server.bind_address, "Server is running");
    axum::serve(listener, router).await?;

    Ok(())
}
