//! Shared application state available to all handlers.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use metro_core::config::AppConfig;
use metro_realtime::RealtimeEngine;
use metro_reservation::{
    Catalog, RateLimiter, ReservationRegistry, ReservationService, SharedSecretAuthorizer,
};

use crate::extractors::identity::{ForwardedAddressResolver, IdentityResolver};

/// Shared application state injected into all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Rate-limited reservation flow and admin operations.
    pub reservations: ReservationService,
    /// Observer fan-out.
    pub realtime: Arc<RealtimeEngine>,
    /// Maps a request to the requester identity.
    pub identity_resolver: Arc<dyn IdentityResolver>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Wires every component from configuration.
    ///
    /// The registry publishes straight into the real-time broadcaster.
    pub fn from_config(config: AppConfig) -> Self {
        let catalog = match &config.catalog.stations {
            Some(names) => Catalog::new(names.iter()),
            None => Catalog::paris(),
        };
        info!(stations = catalog.len(), "Station catalog loaded");

        let authorizer = SharedSecretAuthorizer::new(&config.admin.secret);
        if !authorizer.is_configured() {
            warn!("No admin secret configured, release and reset-all are disabled");
        }

        let limiter = RateLimiter::new(
            config.reservation.points_per_window,
            config.reservation.window(),
        );

        let realtime = Arc::new(RealtimeEngine::new(&config.realtime));
        let registry = ReservationRegistry::new(
            Arc::new(catalog),
            Arc::new(authorizer),
            realtime.broadcaster.clone(),
        );

        let identity_resolver = Arc::new(ForwardedAddressResolver::new(
            config.identity.trust_forwarded_headers,
        ));

        Self {
            config: Arc::new(config),
            reservations: ReservationService::new(Arc::new(limiter), Arc::new(registry)),
            realtime,
            identity_resolver,
            started_at: Instant::now(),
        }
    }
}
