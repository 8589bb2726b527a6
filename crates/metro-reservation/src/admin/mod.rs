//! Administrative authorization.
//!
//! Release and reset are guarded by an [`AdminAuthorizer`]. The registry only
//! sees pass/fail; how a credential is checked is up to the implementation.

mod secret;

use std::fmt;

use async_trait::async_trait;

use crate::error::AuthError;

pub use secret::SharedSecretAuthorizer;

/// Credential presented with an administrative request.
#[derive(Clone, Default)]
pub struct AdminCredential(String);

impl AdminCredential {
    /// Wraps a raw credential.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw credential.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminCredential(***)")
    }
}

/// Pluggable administrative check.
#[async_trait]
pub trait AdminAuthorizer: Send + Sync + fmt::Debug + 'static {
    /// Succeeds when `credential` grants administrative access.
    async fn authorize(&self, credential: &AdminCredential) -> Result<(), AuthError>;
}
