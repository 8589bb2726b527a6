//! Observer pool: tracks all connected observers.

use std::sync::Arc;

use dashmap::DashMap;

use super::handle::{ObserverHandle, ObserverId};

/// Thread-safe pool of connected observers.
#[derive(Debug, Default)]
pub struct ObserverPool {
    by_id: DashMap<ObserverId, Arc<ObserverHandle>>,
}

impl ObserverPool {
    /// Creates a new empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an observer to the pool.
    pub fn add(&self, handle: Arc<ObserverHandle>) {
        self.by_id.insert(handle.id, handle);
    }

    /// Removes an observer from the pool.
    pub fn remove(&self, id: &ObserverId) -> Option<Arc<ObserverHandle>> {
        self.by_id.remove(id).map(|(_, handle)| handle)
    }

    /// Returns total number of connected observers.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no observer is connected.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Returns all observer handles.
    pub fn all(&self) -> Vec<Arc<ObserverHandle>> {
        self.by_id.iter().map(|entry| entry.value().clone()).collect()
    }
}
