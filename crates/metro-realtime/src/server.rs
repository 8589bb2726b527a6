//! Top-level real-time engine that ties together all subsystems.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::info;

use metro_core::config::RealtimeConfig;

use crate::broadcast::Broadcaster;
use crate::connection::manager::ObserverManager;
use crate::metrics::RealtimeMetrics;

/// Central real-time engine.
#[derive(Clone)]
pub struct RealtimeEngine {
    /// Event broadcaster; hand it to the registry as its publisher.
    pub broadcaster: Arc<Broadcaster>,
    /// Observer lifecycle.
    pub observers: Arc<ObserverManager>,
    /// Metrics collector.
    pub metrics: Arc<RealtimeMetrics>,
    /// WebSocket ping interval.
    ping_interval: Duration,
    /// Shutdown signal sender.
    shutdown_tx: broadcast::Sender<()>,
}

impl std::fmt::Debug for RealtimeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeEngine")
            .field("observers", &self.observers.count())
            .finish()
    }
}

impl RealtimeEngine {
    /// Creates a new real-time engine.
    pub fn new(config: &RealtimeConfig) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        let metrics = Arc::new(RealtimeMetrics::new());
        let broadcaster = Arc::new(Broadcaster::new(
            config.channel_buffer_size,
            Arc::clone(&metrics),
        ));
        let observers = Arc::new(ObserverManager::new(
            Arc::clone(&broadcaster),
            Arc::clone(&metrics),
        ));

        info!(
            buffer = config.channel_buffer_size,
            "Real-time engine initialized"
        );

        Self {
            broadcaster,
            observers,
            metrics,
            ping_interval: Duration::from_secs(config.ping_interval_seconds.max(1)),
            shutdown_tx,
        }
    }

    /// Interval between server pings on each socket.
    pub fn ping_interval(&self) -> Duration {
        self.ping_interval
    }

    /// Returns a shutdown receiver for graceful shutdown coordination.
    pub fn shutdown_receiver(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signals every observer task to close its socket.
    pub fn shutdown(&self) {
        info!(
            observers = self.observers.count(),
            "Shutting down real-time engine"
        );
        let _ = self.shutdown_tx.send(());
    }
}
