//! Observer manager: handles observer lifecycle (register, unregister).

use std::sync::Arc;

use tracing::info;

use crate::broadcast::Broadcaster;
use crate::metrics::RealtimeMetrics;

use super::handle::{ObserverHandle, ObserverId};
use super::pool::ObserverPool;
use super::subscription::Subscription;

/// Manages all connected observers.
#[derive(Debug)]
pub struct ObserverManager {
    /// Connected observers.
    pool: ObserverPool,
    /// Event source.
    broadcaster: Arc<Broadcaster>,
    /// Engine counters.
    metrics: Arc<RealtimeMetrics>,
}

impl ObserverManager {
    /// Creates a new observer manager.
    pub fn new(broadcaster: Arc<Broadcaster>, metrics: Arc<RealtimeMetrics>) -> Self {
        Self {
            pool: ObserverPool::new(),
            broadcaster,
            metrics,
        }
    }

    /// Registers a new observer.
    ///
    /// The subscription is opened before this returns, so a status snapshot
    /// taken afterwards cannot miss an event committed in between.
    pub fn register(&self, peer: Option<String>) -> (Arc<ObserverHandle>, Subscription) {
        let handle = Arc::new(ObserverHandle::new(peer));
        let subscription = Subscription::new(
            handle.id,
            self.broadcaster.subscribe(),
            Arc::clone(&self.metrics),
        );

        self.pool.add(Arc::clone(&handle));
        self.metrics.observer_opened();

        info!(
            observer = %handle.id,
            peer = handle.peer.as_deref().unwrap_or("unknown"),
            observers = self.pool.len(),
            "Observer connected"
        );

        (handle, subscription)
    }

    /// Unregisters an observer. Unknown IDs are ignored.
    pub fn unregister(&self, id: &ObserverId) {
        if let Some(handle) = self.pool.remove(id) {
            self.metrics.observer_closed();
            info!(
                observer = %id,
                connected_secs = (chrono::Utc::now() - handle.connected_at).num_seconds(),
                observers = self.pool.len(),
                "Observer disconnected"
            );
        }
    }

    /// Number of connected observers.
    pub fn count(&self) -> usize {
        self.pool.len()
    }

    /// Handles of all connected observers.
    pub fn observers(&self) -> Vec<Arc<ObserverHandle>> {
        self.pool.all()
    }
}
