//! Background sweeper that drops expired rate-limit entries.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info};

use crate::service::ReservationService;

/// Periodically purges expired limiter entries.
///
/// Expired entries are already treated as fresh on the next attempt, so
/// sweeping only bounds memory; it never changes an admission decision.
#[derive(Debug)]
pub struct LimitSweeper {
    service: ReservationService,
    interval: Duration,
}

impl LimitSweeper {
    /// Create a sweeper running every `interval`.
    pub fn new(service: ReservationService, interval: Duration) -> Self {
        Self { service, interval }
    }

    /// Run until the cancel signal flips to `true` or its sender is dropped.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Rate-limit sweeper started"
        );

        let mut ticker = time::interval(self.interval);
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        info!("Rate-limit sweeper stopped");
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let purged = self.service.purge_expired_limits();
                    debug!(
                        purged = purged,
                        tracked = self.service.limiter().tracked(),
                        "Rate-limit sweep complete"
                    );
                }
            }
        }
    }
}
