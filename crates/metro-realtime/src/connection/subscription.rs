//! Per-observer event subscription.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

use crate::message::types::OutboundMessage;
use crate::metrics::RealtimeMetrics;

use super::handle::ObserverId;

/// What an observer should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Forward this message.
    Message(OutboundMessage),
    /// The observer fell behind and missed `skipped` messages; it needs a
    /// fresh snapshot.
    Lagged {
        /// Number of messages skipped.
        skipped: u64,
    },
}

/// Stream of events for one observer.
#[derive(Debug)]
pub struct Subscription {
    /// Owning observer, for logging.
    observer: ObserverId,
    /// Receiver on the broadcaster.
    rx: broadcast::Receiver<OutboundMessage>,
    /// Engine counters.
    metrics: Arc<RealtimeMetrics>,
}

impl Subscription {
    pub(crate) fn new(
        observer: ObserverId,
        rx: broadcast::Receiver<OutboundMessage>,
        metrics: Arc<RealtimeMetrics>,
    ) -> Self {
        Self {
            observer,
            rx,
            metrics,
        }
    }

    /// Waits for the next delivery. Returns `None` once the broadcaster is
    /// gone.
    pub async fn next(&mut self) -> Option<Delivery> {
        match self.rx.recv().await {
            Ok(message) => Some(Delivery::Message(message)),
            Err(RecvError::Lagged(skipped)) => {
                warn!(
                    observer = %self.observer,
                    skipped = skipped,
                    "Observer lagged behind, resynchronizing"
                );
                self.metrics.deliveries_dropped(skipped);
                Some(Delivery::Lagged { skipped })
            }
            Err(RecvError::Closed) => None,
        }
    }
}
