//! Route definitions for the Metro Claim HTTP API.
//!
//! Station and admin routes are mounted under `/api`; the observer socket
//! lives at `/ws`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::security::apply_security_headers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(station_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_upgrade));

    let cors = build_cors_layer(&state.config.server.cors);

    let mut router = Router::new().nest("/api", api_routes).merge(ws_routes);
    if state.config.server.security_headers {
        router = apply_security_headers(router);
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Station endpoints: list, reserve
fn station_routes() -> Router<AppState> {
    Router::new()
        .route("/stations", get(handlers::stations::list_stations))
        .route("/reserve", post(handlers::stations::reserve))
}

/// Admin endpoints: release, reset-all
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/release", post(handlers::admin::release))
        .route("/reset-all", post(handlers::admin::reset_all))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
