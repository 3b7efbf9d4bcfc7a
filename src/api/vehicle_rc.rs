//! Vehicle RC insert endpoint.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::{VehicleRcData, VehicleRcInsertResponse, VehicleRcRow};
use crate::AppState;

/// POST /add_vehicle_rc - Insert a single registration-certificate record.
pub async fn add_vehicle_rc(
    State(state): State<AppState>,
    Json(data): Json<VehicleRcData>,
) -> Result<Json<VehicleRcInsertResponse>, AppError> {
    if data.rc_number.trim().is_empty() {
        return Err(AppError::Validation("rc_number is required".to_string()));
    }

    state.repo.ensure_rc_table().await?;

    if state.repo.rc_exists(&data.rc_number).await? {
        return Err(AppError::Conflict("Duplicate RC entry".to_string()));
    }

    // registration_date has a strict contract; everything else coerces
    // leniently and cannot fail.
    let row = VehicleRcRow::from_request(&data)
        .map_err(|e| AppError::Validation(format!("registration_date: {}", e)))?;
    state.repo.insert_vehicle_rc(&row).await?;

    tracing::info!(rc_number = %row.rc_number, "inserted vehicle rc row");

    Ok(Json(VehicleRcInsertResponse {
        message: "RC data inserted successfully".to_string(),
        rc_number: row.rc_number,
    }))
}
