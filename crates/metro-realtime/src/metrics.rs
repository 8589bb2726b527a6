//! Realtime engine metrics.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Engine-level counters.
#[derive(Debug, Default)]
pub struct RealtimeMetrics {
    /// Events handed to the broadcast channel.
    events_published: AtomicU64,
    /// Observer connections ever registered.
    observers_total: AtomicU64,
    /// Observer connections currently registered.
    observers_active: AtomicU64,
    /// Messages skipped by lagging observers.
    deliveries_dropped: AtomicU64,
    /// Snapshot resynchronizations sent.
    resyncs: AtomicU64,
}

impl RealtimeMetrics {
    /// Create new zeroed metrics
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn event_published(&self) {
        self.events_published.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn observer_opened(&self) {
        self.observers_total.fetch_add(1, Ordering::Relaxed);
        self.observers_active.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn observer_closed(&self) {
        self.observers_active.fetch_sub(1, Ordering::Relaxed);
    }

    pub(crate) fn deliveries_dropped(&self, count: u64) {
        self.deliveries_dropped.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a snapshot resynchronization.
    pub fn resync_sent(&self) {
        self.resyncs.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_published: self.events_published.load(Ordering::Relaxed),
            observers_total: self.observers_total.load(Ordering::Relaxed),
            observers_active: self.observers_active.load(Ordering::Relaxed),
            deliveries_dropped: self.deliveries_dropped.load(Ordering::Relaxed),
            resyncs: self.resyncs.load(Ordering::Relaxed),
        }
    }
}

/// Serializable metrics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Events handed to the broadcast channel
    pub events_published: u64,
    /// Observer connections ever registered
    pub observers_total: u64,
    /// Observer connections currently registered
    pub observers_active: u64,
    /// Messages skipped by lagging observers
    pub deliveries_dropped: u64,
    /// Snapshot resynchronizations sent
    pub resyncs: u64,
}
