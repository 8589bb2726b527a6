//! Administrative access and identity resolution configuration.

use serde::{Deserialize, Serialize};

/// Administrative access configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Shared secret required by release and reset. An empty secret
    /// disables the administrative endpoints.
    #[serde(default)]
    pub secret: String,
}

/// Client identity resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Honour `X-Forwarded-For` / `X-Real-IP` (deployments behind a proxy).
    #[serde(default = "default_true")]
    pub trust_forwarded_headers: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            trust_forwarded_headers: true,
        }
    }
}

fn default_true() -> bool {
    true
}
