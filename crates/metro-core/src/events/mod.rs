//! Domain events emitted by the reservation registry.
//!
//! Events are published through an [`EventPublisher`](crate::traits::EventPublisher)
//! after the mutation they describe has been applied, and fanned out to
//! every connected observer by the real-time engine.

use serde::{Deserialize, Serialize};

/// A committed change to the reservation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StationEvent {
    /// A station was claimed.
    StationReserved {
        /// The station name.
        station: String,
    },
    /// A single station was released by an administrator.
    StationReleased {
        /// The station name.
        station: String,
    },
    /// Every reservation was cleared.
    AllStationsReleased,
}

impl StationEvent {
    /// The station this event concerns, if it targets a single one.
    pub fn station(&self) -> Option<&str> {
        match self {
            Self::StationReserved { station } | Self::StationReleased { station } => Some(station),
            Self::AllStationsReleased => None,
        }
    }
}
