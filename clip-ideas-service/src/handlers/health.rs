use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

use crate::startup::AppState;

pub const SERVICE_NAME: &str = "clip-ideas-service";

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: the provider must be configured. Does not call upstream.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.generator.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Provider not ready");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}
