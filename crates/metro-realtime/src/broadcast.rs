//! Event broadcaster: fans committed station events out to observers.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use metro_core::events::StationEvent;
use metro_core::traits::EventPublisher;

use crate::message::types::OutboundMessage;
use crate::metrics::RealtimeMetrics;

/// Publish/subscribe channel between the registry and observers.
///
/// `publish` never blocks and never fails: each observer owns an independent
/// receiver, so a slow or vanished observer only affects itself. There is no
/// replay; observers joining later start from a snapshot.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    /// Broadcast sender, one receiver per observer.
    tx: broadcast::Sender<OutboundMessage>,
    /// Engine counters.
    metrics: Arc<RealtimeMetrics>,
}

impl Broadcaster {
    /// Creates a broadcaster buffering up to `buffer_size` messages per
    /// observer.
    pub fn new(buffer_size: usize, metrics: Arc<RealtimeMetrics>) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx, metrics }
    }

    /// Opens a new receiver observing every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<OutboundMessage> {
        self.tx.subscribe()
    }

    /// Number of open receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl EventPublisher for Broadcaster {
    fn publish(&self, event: StationEvent) {
        let station = event.station().unwrap_or("*").to_string();
        self.metrics.event_published();

        match self.tx.send(OutboundMessage::from(event)) {
            Ok(receivers) => debug!(station = %station, receivers, "Station event broadcast"),
            Err(_) => debug!(station = %station, "Station event dropped, no observers connected"),
        }
    }
}
