//! Per-identity fixed-window rate limiter.
//!
//! Every identity gets `points` attempts per window. The window opens at the
//! identity's first attempt (not at process start) and the full budget is
//! restored once it has elapsed. A spent point is never refunded, whatever
//! the outcome of the attempt it paid for.

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::{debug, warn};

use metro_core::types::Identity;

use crate::error::RateLimited;

/// Longest supported window, about thirty years.
pub const MAX_WINDOW: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Budget state of one identity.
#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    /// Points left in the current window.
    remaining_points: u32,
    /// When the current window closes.
    window_reset_at: Instant,
}

impl RateLimitEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.window_reset_at
    }
}

/// In-memory fixed-window limiter keyed by [`Identity`].
///
/// Entries live in a sharded map; the entry lock serializes attempts of one
/// identity while different identities proceed independently.
#[derive(Debug)]
pub struct RateLimiter {
    /// Identity → budget state.
    entries: DashMap<Identity, RateLimitEntry>,
    /// Points granted per window.
    points: u32,
    /// Window length.
    window: Duration,
}

impl RateLimiter {
    /// Creates a limiter granting `points` attempts per `window`.
    ///
    /// Windows longer than [`MAX_WINDOW`] are clamped to it.
    pub fn new(points: u32, window: Duration) -> Self {
        if window > MAX_WINDOW {
            warn!(
                requested_secs = window.as_secs(),
                max_secs = MAX_WINDOW.as_secs(),
                "Rate-limit window too long, clamping"
            );
        }

        Self {
            entries: DashMap::new(),
            points,
            window: window.min(MAX_WINDOW),
        }
    }

    /// End of a window opened at `now`.
    fn window_end(&self, now: Instant) -> Instant {
        now.checked_add(self.window).unwrap_or(now)
    }

    /// Spends one point of `identity`'s budget.
    ///
    /// Fails without touching any state when the budget is exhausted and the
    /// window is still open.
    pub fn consume(&self, identity: &Identity) -> Result<(), RateLimited> {
        if self.points == 0 {
            return Err(RateLimited {
                retry_after: self.window,
            });
        }

        let now = Instant::now();

        match self.entries.entry(identity.clone()) {
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                vacant.insert(RateLimitEntry {
                    remaining_points: self.points - 1,
                    window_reset_at: self.window_end(now),
                });
                Ok(())
            }
            dashmap::mapref::entry::Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();

                if entry.is_expired(now) {
                    debug!(identity = %identity, "Rate-limit window elapsed, budget restored");
                    entry.remaining_points = self.points;
                    entry.window_reset_at = self.window_end(now);
                }

                if entry.remaining_points == 0 {
                    return Err(RateLimited {
                        retry_after: entry.window_reset_at.saturating_duration_since(now),
                    });
                }

                entry.remaining_points -= 1;
                Ok(())
            }
        }
    }

    /// Points `identity` could still spend right now.
    pub fn remaining(&self, identity: &Identity) -> u32 {
        let now = Instant::now();
        self.entries
            .get(identity)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.remaining_points)
            .unwrap_or(self.points)
    }

    /// Drops entries whose window has elapsed. Returns how many were dropped.
    ///
    /// An elapsed entry and a missing one both grant the full budget, so this
    /// never changes a decision.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    /// Number of tracked identities.
    pub fn tracked(&self) -> usize {
        self.entries.len()
    }

    /// Points granted per window.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }
}
