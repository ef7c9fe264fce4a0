//! Conversion from domain errors to HTTP responses with appropriate status
//! codes and JSON error bodies.

use crate::error::DamSyncError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

impl IntoResponse for DamSyncError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
