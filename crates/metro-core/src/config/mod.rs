//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! TOML files and `METRO__`-prefixed environment variables. Each sub-module
//! represents a logical configuration section; every field has a default so
//! an empty configuration is valid.

pub mod admin;
pub mod app;
pub mod logging;
pub mod realtime;
pub mod reservation;

use serde::{Deserialize, Serialize};

pub use self::admin::{AdminConfig, IdentityConfig};
pub use self::app::{CorsConfig, ServerConfig};
pub use self::logging::LoggingConfig;
pub use self::realtime::RealtimeConfig;
pub use self::reservation::{CatalogConfig, ReservationConfig};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate-limit budget and maintenance settings.
    #[serde(default)]
    pub reservation: ReservationConfig,
    /// Station catalog override.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Administrative access settings.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Client identity resolution settings.
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Real-time WebSocket settings.
    #[serde(default)]
    pub realtime: RealtimeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml`, the `config/{env}.toml` overlay and
    /// environment variables prefixed with `METRO` (`METRO__ADMIN__SECRET`).
    /// Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("METRO")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("catalog.stations")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
