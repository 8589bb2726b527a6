//! Reservation rate-limit and catalog configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-identity rate-limit budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationConfig {
    /// Reservation attempts granted per identity per window.
    #[serde(default = "default_points")]
    pub points_per_window: u32,
    /// Window length in seconds, measured from the first attempt.
    #[serde(default = "default_window")]
    pub window_seconds: u64,
    /// Interval of the expired-entry sweep in seconds (0 disables it).
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            points_per_window: default_points(),
            window_seconds: default_window(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

impl ReservationConfig {
    /// Returns the window as a [`Duration`].
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }

    /// Returns the sweep interval, or `None` when sweeping is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_seconds > 0).then(|| Duration::from_secs(self.sweep_interval_seconds))
    }
}

/// Station catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Ordered station names. The bundled Paris list is used when absent.
    #[serde(default)]
    pub stations: Option<Vec<String>>,
}

fn default_points() -> u32 {
    1
}

fn default_window() -> u64 {
    86_400
}

fn default_sweep_interval() -> u64 {
    3_600
}
