//! Station listing and reservation handlers.

use axum::Json;
use axum::extract::State;

use metro_reservation::StationStatus;

use crate::dto::request::ReserveRequest;
use crate::dto::response::ReserveResponse;
use crate::error::ApiError;
use crate::extractors::{ClientIdentity, JsonBody};
use crate::state::AppState;

/// GET /api/stations
pub async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationStatus>> {
    Json(state.reservations.status().await)
}

/// POST /api/reserve
pub async fn reserve(
    State(state): State<AppState>,
    ClientIdentity(identity): ClientIdentity,
    JsonBody(req): JsonBody<ReserveRequest>,
) -> Result<Json<ReserveResponse>, ApiError> {
    let reservation = state.reservations.claim(&req.station, &identity).await?;

    Ok(Json(ReserveResponse {
        success: true,
        station: reservation.station,
    }))
}
