//! Response DTOs.

use serde::{Deserialize, Serialize};

use metro_realtime::metrics::MetricsSnapshot;

/// Successful reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveResponse {
    /// Always `true`.
    pub success: bool,
    /// The claimed station.
    pub station: String,
}

/// Bare success acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
}

impl SuccessResponse {
    /// Creates a success acknowledgement.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
    /// Live reservations.
    pub reservations: usize,
    /// Catalog size.
    pub stations: usize,
    /// Connected observers.
    pub observers: usize,
    /// Real-time engine counters.
    pub realtime: MetricsSnapshot,
}
