//! Event publisher trait used by the reservation registry.

use crate::events::StationEvent;

/// Sink for committed reservation events.
///
/// The registry calls `publish` while it still holds its state lock, so
/// events for the same station reach the sink in commit order.
/// Implementations must not block and must not fail the caller: delivery
/// problems are handled (and logged) on the publisher's side.
pub trait EventPublisher: Send + Sync + std::fmt::Debug + 'static {
    /// Publish an event to every currently connected observer.
    fn publish(&self, event: StationEvent);
}

/// Publisher that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: StationEvent) {}
}
