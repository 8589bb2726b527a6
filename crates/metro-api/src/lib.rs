//! # metro-api
//!
//! HTTP API layer for Metro Claim built on Axum.
//!
//! Provides the station and admin endpoints, the observer WebSocket,
//! middleware (CORS, request logging), client identity resolution, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
