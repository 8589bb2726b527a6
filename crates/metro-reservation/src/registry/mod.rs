//! Reservation registry: the single owner of the identity↔station bijection.

mod state;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use metro_core::events::StationEvent;
use metro_core::traits::EventPublisher;
use metro_core::types::Identity;

use crate::admin::{AdminAuthorizer, AdminCredential};
use crate::catalog::Catalog;
use crate::error::{AuthError, ReleaseError, ReserveError};

use self::state::RegistryState;

/// A live claim of one station by one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The claimed station.
    pub station: String,
    /// The claimant.
    pub identity: Identity,
    /// When the claim was made.
    pub reserved_at: DateTime<Utc>,
}

/// Reservation flag of one catalog station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationStatus {
    /// Station name.
    pub name: String,
    /// Whether someone holds it.
    pub reserved: bool,
}

/// Authoritative record of all live reservations.
///
/// `reserve`, `release` and `reset_all` each run as one critical section
/// under the write lock: checks, the two-view mutation and the event publish
/// happen without any other operation observing an intermediate state.
/// Publishing under the lock keeps per-station event order equal to commit
/// order.
#[derive(Debug)]
pub struct ReservationRegistry {
    /// Valid stations.
    catalog: Arc<Catalog>,
    /// Both views of the reservation set.
    state: RwLock<RegistryState>,
    /// Administrative check for release and reset.
    authorizer: Arc<dyn AdminAuthorizer>,
    /// Event sink for committed changes.
    publisher: Arc<dyn EventPublisher>,
}

impl ReservationRegistry {
    /// Creates an empty registry over `catalog`.
    pub fn new(
        catalog: Arc<Catalog>,
        authorizer: Arc<dyn AdminAuthorizer>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            catalog,
            state: RwLock::new(RegistryState::default()),
            authorizer,
            publisher,
        }
    }

    /// Claims `station` for `identity`.
    ///
    /// Checks, in order: the station exists, the identity holds nothing, the
    /// station is free. The first failing check decides the error.
    pub async fn reserve(
        &self,
        station: &str,
        identity: &Identity,
    ) -> Result<Reservation, ReserveError> {
        let Some(station) = self.catalog.get(station) else {
            return Err(ReserveError::InvalidStation(station.to_string()));
        };

        let mut state = self.state.write().await;

        if let Some(held) = state.holding_of(identity) {
            debug!(identity = %identity, held = %held, "Identity already holds a station");
            return Err(ReserveError::IdentityAlreadyReserved);
        }

        if state.is_reserved(&station.name) {
            return Err(ReserveError::StationTaken(station.name.clone()));
        }

        let reservation = Reservation {
            station: station.name.clone(),
            identity: identity.clone(),
            reserved_at: Utc::now(),
        };
        state.insert(reservation.clone());

        self.publisher.publish(StationEvent::StationReserved {
            station: reservation.station.clone(),
        });

        info!(
            station = %reservation.station,
            identity = %identity,
            reserved = state.len(),
            "Station reserved"
        );

        Ok(reservation)
    }

    /// Frees `station`. Requires administrative authorization.
    pub async fn release(
        &self,
        station: &str,
        credential: &AdminCredential,
    ) -> Result<(), ReleaseError> {
        self.authorizer.authorize(credential).await?;

        let mut state = self.state.write().await;

        let Some(reservation) = state.remove_station(station) else {
            return Err(ReleaseError::NotReserved(station.to_string()));
        };

        self.publisher.publish(StationEvent::StationReleased {
            station: reservation.station.clone(),
        });

        info!(
            station = %reservation.station,
            identity = %reservation.identity,
            "Station released"
        );

        Ok(())
    }

    /// Clears every reservation. Requires administrative authorization.
    /// Idempotent.
    pub async fn reset_all(&self, credential: &AdminCredential) -> Result<(), AuthError> {
        self.authorizer.authorize(credential).await?;

        let mut state = self.state.write().await;
        let removed = state.clear();

        self.publisher.publish(StationEvent::AllStationsReleased);

        info!(removed = removed, "All stations released");
        Ok(())
    }

    /// Reservation flag of every catalog station, in canonical order.
    pub async fn status(&self) -> Vec<StationStatus> {
        let state = self.state.read().await;
        self.catalog
            .list()
            .map(|station| StationStatus {
                name: station.name.clone(),
                reserved: state.is_reserved(&station.name),
            })
            .collect()
    }

    /// Station held by `identity`, if any.
    pub async fn holder_of(&self, identity: &Identity) -> Option<String> {
        self.state
            .read()
            .await
            .holding_of(identity)
            .map(str::to_string)
    }

    /// Identity holding `station`, if any.
    pub async fn held_by(&self, station: &str) -> Option<Identity> {
        self.state.read().await.station_holder(station).cloned()
    }

    /// Number of live reservations.
    pub async fn reservation_count(&self) -> usize {
        self.state.read().await.len()
    }

    /// The catalog this registry validates against.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Asserts the two views are inverses and only hold catalog stations.
    #[cfg(test)]
    async fn assert_consistent(&self) {
        let state = self.state.read().await;
        assert!(state.is_bijective(), "views diverged: {state:?}");
        for station in state.stations() {
            assert!(self.catalog.exists(station), "unknown station {station}");
        }
    }
}
