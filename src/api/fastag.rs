//! FASTag insert endpoint.

use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::models::{FastagData, FastagInsertResponse, FastagRow};
use crate::AppState;

/// POST /add_fastag - Insert a single FASTag event.
pub async fn add_fastag(
    State(state): State<AppState>,
    Json(data): Json<FastagData>,
) -> Result<(StatusCode, Json<FastagInsertResponse>), AppError> {
    // Natural key fields must be non-empty; serde only guarantees presence.
    if data.tag_id.trim().is_empty() {
        return Err(AppError::Validation("TagId is required".to_string()));
    }
    if data.vrn.trim().is_empty() {
        return Err(AppError::Validation("VRN is required".to_string()));
    }

    state.repo.ensure_fastag_table().await?;

    if state.repo.fastag_exists(&data.tag_id, &data.vrn).await? {
        return Err(AppError::Conflict("Duplicate FASTag entry".to_string()));
    }

    let row = FastagRow::from_request(&data);
    state.repo.insert_fastag(&row).await?;

    tracing::info!(tag_id = %row.tag_id, vrn = %row.vrn, "inserted fastag row");

    Ok((
        StatusCode::CREATED,
        Json(FastagInsertResponse {
            message: "FASTag data inserted successfully".to_string(),
            tag_id: row.tag_id,
            vrn: row.vrn,
        }),
    ))
}
