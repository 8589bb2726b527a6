//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.reservations.registry();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        reservations: registry.reservation_count().await,
        stations: registry.catalog().len(),
        observers: state.realtime.observers.count(),
        realtime: state.realtime.metrics.snapshot(),
    })
}
