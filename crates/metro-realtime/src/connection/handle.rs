//! Individual observer connection handle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique observer connection identifier
pub type ObserverId = Uuid;

/// Metadata of one connected observer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverHandle {
    /// Unique connection ID
    pub id: ObserverId,
    /// Remote address, when known
    pub peer: Option<String>,
    /// When the connection was established
    pub connected_at: DateTime<Utc>,
}

impl ObserverHandle {
    /// Create a new observer handle
    pub fn new(peer: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            peer,
            connected_at: Utc::now(),
        }
    }
}
