//! Reservation service: the attempt flow used by the gateway.

use std::sync::Arc;

use tracing::{info, warn};

use metro_core::types::Identity;

use crate::admin::AdminCredential;
use crate::error::{AuthError, ClaimError, ReleaseError};
use crate::limiter::RateLimiter;
use crate::registry::{Reservation, ReservationRegistry, StationStatus};

/// Couples the rate limiter and the registry.
///
/// A claim first spends a point, then attempts the reservation. The point
/// stays spent when the reservation fails. Administrative operations go to
/// the registry directly and do not touch the limiter.
#[derive(Debug, Clone)]
pub struct ReservationService {
    /// Per-identity attempt budget.
    limiter: Arc<RateLimiter>,
    /// The identity↔station registry.
    registry: Arc<ReservationRegistry>,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(limiter: Arc<RateLimiter>, registry: Arc<ReservationRegistry>) -> Self {
        Self { limiter, registry }
    }

    /// Attempts to claim `station` for `identity`.
    pub async fn claim(&self, station: &str, identity: &Identity) -> Result<Reservation, ClaimError> {
        if let Err(limited) = self.limiter.consume(identity) {
            warn!(
                identity = %identity,
                retry_after_secs = limited.retry_after.as_secs(),
                "Reservation attempt rate limited"
            );
            return Err(limited.into());
        }

        match self.registry.reserve(station, identity).await {
            Ok(reservation) => Ok(reservation),
            Err(err) => {
                info!(
                    identity = %identity,
                    station = %station,
                    reason = %err,
                    "Reservation attempt rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Releases `station` on behalf of an administrator.
    pub async fn release(
        &self,
        station: &str,
        credential: &AdminCredential,
    ) -> Result<(), ReleaseError> {
        self.registry.release(station, credential).await
    }

    /// Clears every reservation on behalf of an administrator.
    pub async fn reset_all(&self, credential: &AdminCredential) -> Result<(), AuthError> {
        self.registry.reset_all(credential).await
    }

    /// Reservation flags over the whole catalog.
    pub async fn status(&self) -> Vec<StationStatus> {
        self.registry.status().await
    }

    /// Drops expired rate-limit entries.
    pub fn purge_expired_limits(&self) -> usize {
        self.limiter.purge_expired()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Arc<ReservationRegistry> {
        &self.registry
    }

    /// The underlying rate limiter.
    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }
}
