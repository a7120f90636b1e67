use crate::models::DiagnosisRequest;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;
use validator::Validate;

/// Run the AI diagnosis flow.
///
/// Replies 200 with a success or error payload either way; only a
/// malformed or invalid request produces an HTTP error.
pub async fn run_diagnosis(
    State(state): State<AppState>,
    Json(request): Json<DiagnosisRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let (profile, report, image_paths) = request.into_parts();
    let result = state.triage.diagnose(profile, report, image_paths).await;

    Ok(Json(result))
}
