//! Outbound WebSocket message type definitions.

use serde::{Deserialize, Serialize};

use metro_core::events::StationEvent;
use metro_reservation::StationStatus;

/// Messages pushed by the server to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    /// Full reservation state, sent on connect and after lag.
    Snapshot {
        /// Every catalog station in canonical order.
        stations: Vec<StationStatus>,
    },
    /// A station was claimed.
    StationReserved {
        /// Station name.
        station: String,
    },
    /// A station was released.
    StationReleased {
        /// Station name.
        station: String,
    },
    /// Every reservation was cleared.
    AllStationsReleased,
}

impl OutboundMessage {
    /// Serializes the message to its JSON text frame.
    pub fn to_json(&self) -> String {
        // Plain strings and bools only; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<StationEvent> for OutboundMessage {
    fn from(event: StationEvent) -> Self {
        match event {
            StationEvent::StationReserved { station } => Self::StationReserved { station },
            StationEvent::StationReleased { station } => Self::StationReleased { station },
            StationEvent::AllStationsReleased => Self::AllStationsReleased,
        }
    }
}
