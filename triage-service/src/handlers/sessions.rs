use crate::models::SESSION_SLOTS;
use axum::{response::IntoResponse, Json};
use serde_json::json;

/// List the bookable session slots.
pub async fn list_sessions() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "sessions": SESSION_SLOTS
    }))
}
