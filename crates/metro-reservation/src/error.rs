//! Reservation domain errors and their mapping into [`AppError`].

use std::time::Duration;

use thiserror::Error;

use metro_core::error::AppError;

/// Failure of a reservation attempt. Variants are listed in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReserveError {
    /// The station is not in the catalog.
    #[error("Unknown station '{0}'")]
    InvalidStation(String),
    /// The requester already holds a station.
    #[error("You have already claimed a station")]
    IdentityAlreadyReserved,
    /// Another requester holds the station.
    #[error("Station '{0}' is already taken")]
    StationTaken(String),
}

/// Failure of the administrative check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The credential did not match.
    #[error("Administrative access denied")]
    Denied,
    /// No administrative secret is configured.
    #[error("Administrative access is not configured")]
    NotConfigured,
}

/// Failure of an administrative release.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    /// The administrative check failed.
    #[error(transparent)]
    Unauthorized(#[from] AuthError),
    /// The station has no reservation.
    #[error("Station '{0}' is not reserved")]
    NotReserved(String),
}

/// The identity has no points left in its current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Attempt budget exhausted, retry in {}s", retry_after.as_secs())]
pub struct RateLimited {
    /// Time until the window resets.
    pub retry_after: Duration,
}

/// Failure of the full attempt flow (rate limit, then reserve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    /// The rate limiter rejected the attempt.
    #[error(transparent)]
    RateLimited(#[from] RateLimited),
    /// The registry rejected the reservation.
    #[error(transparent)]
    Reserve(#[from] ReserveError),
}

impl From<ReserveError> for AppError {
    fn from(err: ReserveError) -> Self {
        match err {
            ReserveError::InvalidStation(_) => AppError::validation(err.to_string()),
            ReserveError::IdentityAlreadyReserved | ReserveError::StationTaken(_) => {
                AppError::conflict(err.to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::authorization(err.to_string())
    }
}

impl From<ReleaseError> for AppError {
    fn from(err: ReleaseError) -> Self {
        match err {
            ReleaseError::Unauthorized(auth) => auth.into(),
            ReleaseError::NotReserved(_) => AppError::conflict(err.to_string()),
        }
    }
}

impl From<RateLimited> for AppError {
    fn from(err: RateLimited) -> Self {
        AppError::rate_limited(err.to_string())
    }
}

impl From<ClaimError> for AppError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::RateLimited(e) => e.into(),
            ClaimError::Reserve(e) => e.into(),
        }
    }
}
