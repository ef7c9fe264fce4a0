//! Trigger endpoint handlers.

use super::state::AppState;
use crate::download::{MirrorOptions, MirrorReport, run_mirror};
use crate::error::DamSyncError;
use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    #[serde(default)]
    pub path: Option<String>,

    /// Overrides the configured repository base URL for this run.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// POST /download - run one mirror batch job
///
/// The manifest URL is formed by concatenating the base URL and `path`.
/// A missing `path` is a caller-input error; per-asset download failures are
/// reported inside the 200 response, not as an error status.
pub async fn trigger_download(
    State(state): State<AppState>,
    Json(request): Json<DownloadRequest>,
) -> Result<Json<MirrorReport>, DamSyncError> {
    let Some(path) = request.path.filter(|path| !path.is_empty()) else {
        return Err(DamSyncError::InvalidRequest {
            details: "missing required field: path".to_string(),
        });
    };

    let options = MirrorOptions::from_config(&state.config, request.base_url);
    let manifest_url = format!("{}{}", options.base_url, path);

    let report = run_mirror(&state.client, &manifest_url, &options).await?;
    Ok(Json(report))
}

/// GET /health - health check
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
