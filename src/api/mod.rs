//! REST API module.
//!
//! Per-request control flow for both insert endpoints is
//! schema guard -> duplicate guard -> normalizer -> insert executor.

mod fastag;
mod vehicle_rc;

pub use fastag::*;
pub use vehicle_rc::*;

use axum::Json;
use serde::Serialize;

/// Health probe payload for `GET /`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET / - Health probe. Always succeeds.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "Vehicle Data API",
        endpoints: &["/add_fastag", "/add_vehicle_rc"],
    })
}
