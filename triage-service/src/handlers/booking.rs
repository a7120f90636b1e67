use crate::models::REQUIRED_BOOKING_FIELDS;
use axum::{response::IntoResponse, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

/// Confirm a session booking.
///
/// Every required field key must be present; the first absent key in
/// declaration order is reported. Values are not inspected, so empty
/// or null fields still confirm. The confirmed payload is echoed back
/// to the client.
pub async fn book_session(Json(payload): Json<Value>) -> Result<impl IntoResponse, AppError> {
    for field in REQUIRED_BOOKING_FIELDS {
        if payload.get(field).is_none() {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Missing field: {}",
                field
            )));
        }
    }

    tracing::info!(
        hospital = payload["hospital_name"].as_str().unwrap_or_default(),
        session = payload["session"].as_str().unwrap_or_default(),
        "Booking confirmed"
    );

    Ok(Json(json!({
        "status": "success",
        "message": "Booking confirmed.",
        "data": payload
    })))
}
