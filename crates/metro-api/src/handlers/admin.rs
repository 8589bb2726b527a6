//! Administrative handlers.

use axum::Json;
use axum::extract::State;

use metro_reservation::AdminCredential;

use crate::dto::request::{ReleaseRequest, ResetAllRequest};
use crate::dto::response::SuccessResponse;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::state::AppState;

/// POST /api/release
pub async fn release(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ReleaseRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let credential = AdminCredential::new(req.admin_key);
    state.reservations.release(&req.station, &credential).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/reset-all
pub async fn reset_all(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ResetAllRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let credential = AdminCredential::new(req.admin_key);
    state.reservations.reset_all(&credential).await?;
    Ok(Json(SuccessResponse::ok()))
}
