//! Shared-secret authorizer with constant-time comparison.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::AuthError;

use super::{AdminAuthorizer, AdminCredential};

/// Grants access to callers presenting the configured secret.
///
/// Both sides are hashed before comparing so the comparison runs over a fixed
/// length regardless of the candidate's length. An empty secret disables
/// administrative access entirely.
#[derive(Clone)]
pub struct SharedSecretAuthorizer {
    /// SHA-256 of the configured secret; `None` when unset.
    digest: Option<[u8; 32]>,
}

impl SharedSecretAuthorizer {
    /// Creates an authorizer for `secret`.
    pub fn new(secret: &str) -> Self {
        let digest: Option<[u8; 32]> =
            (!secret.is_empty()).then(|| Sha256::digest(secret.as_bytes()).into());
        Self { digest }
    }

    /// Whether a secret is configured.
    pub fn is_configured(&self) -> bool {
        self.digest.is_some()
    }
}

impl std::fmt::Debug for SharedSecretAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretAuthorizer")
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[async_trait]
impl AdminAuthorizer for SharedSecretAuthorizer {
    async fn authorize(&self, credential: &AdminCredential) -> Result<(), AuthError> {
        let Some(expected) = &self.digest else {
            return Err(AuthError::NotConfigured);
        };

        let candidate: [u8; 32] = Sha256::digest(credential.expose().as_bytes()).into();
        if bool::from(candidate[..].ct_eq(&expected[..])) {
            Ok(())
        } else {
            warn!("Rejected administrative credential");
            Err(AuthError::Denied)
        }
    }
}
