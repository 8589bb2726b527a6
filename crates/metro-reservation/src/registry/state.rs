//! The two views of the live reservation set.

use std::collections::HashMap;

use metro_core::types::Identity;

use super::Reservation;

/// Station → reservation and identity → station, kept as exact inverses.
///
/// Every mutation goes through the methods below, which update both views
/// together; callers hold the registry lock around them.
#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    by_station: HashMap<String, Reservation>,
    by_identity: HashMap<Identity, String>,
}

impl RegistryState {
    pub(crate) fn station_holder(&self, station: &str) -> Option<&Identity> {
        self.by_station.get(station).map(|r| &r.identity)
    }

    pub(crate) fn holding_of(&self, identity: &Identity) -> Option<&str> {
        self.by_identity.get(identity).map(String::as_str)
    }

    pub(crate) fn is_reserved(&self, station: &str) -> bool {
        self.by_station.contains_key(station)
    }

    pub(crate) fn len(&self) -> usize {
        self.by_station.len()
    }

    /// Records a pairing. Both sides must be free.
    pub(crate) fn insert(&mut self, reservation: Reservation) {
        debug_assert!(!self.by_station.contains_key(&reservation.station));
        debug_assert!(!self.by_identity.contains_key(&reservation.identity));

        self.by_identity
            .insert(reservation.identity.clone(), reservation.station.clone());
        self.by_station
            .insert(reservation.station.clone(), reservation);
    }

    /// Removes the pairing of `station` from both views.
    pub(crate) fn remove_station(&mut self, station: &str) -> Option<Reservation> {
        let reservation = self.by_station.remove(station)?;
        self.by_identity.remove(&reservation.identity);
        Some(reservation)
    }

    /// Removes every pairing. Returns how many were removed.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.by_station.len();
        self.by_station.clear();
        self.by_identity.clear();
        removed
    }

    /// Whether the two views are exact inverses.
    #[cfg(test)]
    pub(crate) fn is_bijective(&self) -> bool {
        self.by_station.len() == self.by_identity.len()
            && self.by_station.iter().all(|(station, r)| {
                r.station == *station
                    && self.by_identity.get(&r.identity).map(String::as_str) == Some(station.as_str())
            })
    }

    #[cfg(test)]
    pub(crate) fn stations(&self) -> impl Iterator<Item = &str> {
        self.by_station.keys().map(String::as_str)
    }
}
