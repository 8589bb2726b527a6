//! Requester identity.
//!
//! An [`Identity`] is an opaque token naming one requester (in practice a
//! normalized client address). Two requests with the same identity compete
//! for the same rate-limit budget and the same single reservation.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque, cheaply cloneable requester identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Arc<str>);

impl Identity {
    /// Create an identity from a raw token, unchanged.
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    /// Create an identity from a client address string.
    ///
    /// Trims whitespace, lowercases (IPv6 hex digits) and strips the
    /// IPv4-mapped IPv6 prefix so `::ffff:10.0.0.1` and `10.0.0.1` are the
    /// same requester. Returns `None` for an empty address.
    pub fn from_address(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().to_ascii_lowercase();
        let address = trimmed.strip_prefix("::ffff:").unwrap_or(&trimmed);
        if address.is_empty() {
            None
        } else {
            Some(Self::new(address))
        }
    }

    /// Return the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Identity {
    fn from(token: String) -> Self {
        Self(Arc::from(token))
    }
}
