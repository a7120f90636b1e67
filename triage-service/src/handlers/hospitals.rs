use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct HospitalListParams {
    pub city: Option<String>,
}

/// List bookable hospitals, optionally narrowed by city.
pub async fn list_hospitals(
    State(state): State<AppState>,
    Query(params): Query<HospitalListParams>,
) -> Result<impl IntoResponse, AppError> {
    let hospitals = state.directory.list(params.city.as_deref()).await?;

    Ok(Json(json!({
        "status": "success",
        "hospitals": hospitals
    })))
}
