use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "triage-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check endpoint for K8s readiness probes.
///
/// Ready once the AI provider answers its health check.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.triage.health_check().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
