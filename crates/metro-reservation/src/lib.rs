//! # metro-reservation
//!
//! The reservation core of Metro Claim:
//!
//! - [`Catalog`]: the immutable, ordered set of claimable stations
//! - [`RateLimiter`]: per-identity fixed-window attempt budget
//! - [`ReservationRegistry`]: the identity↔station bijection with atomic
//!   reserve / release / reset operations
//! - [`AdminAuthorizer`]: pluggable check guarding administrative operations
//! - [`ReservationService`]: the attempt flow (rate limit, then reserve)
//! - [`LimitSweeper`]: background purge of expired rate-limit entries

pub mod admin;
pub mod catalog;
pub mod error;
pub mod limiter;
pub mod registry;
pub mod service;
pub mod sweeper;

pub use admin::{AdminAuthorizer, AdminCredential, SharedSecretAuthorizer};
pub use catalog::{Catalog, Station};
pub use error::{AuthError, ClaimError, RateLimited, ReleaseError, ReserveError};
pub use limiter::RateLimiter;
pub use registry::{Reservation, ReservationRegistry, StationStatus};
pub use service::ReservationService;
pub use sweeper::LimitSweeper;
