//! Request DTOs.
//!
//! Field names follow the browser client (`station`, `adminKey`); the
//! generic `slot` / `adminAuth` spellings are accepted as aliases. Missing
//! or non-string fields deserialize to empty strings so the domain layer
//! reports them, after the attempt has been counted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keeps string values; anything else becomes an empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Reservation request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReserveRequest {
    /// Station to claim.
    #[serde(default, alias = "slot", deserialize_with = "lenient_string")]
    pub station: String,
}

/// Administrative release request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseRequest {
    /// Station to release.
    #[serde(default, alias = "slot", deserialize_with = "lenient_string")]
    pub station: String,
    /// Administrative credential.
    #[serde(
        default,
        rename = "adminKey",
        alias = "adminAuth",
        deserialize_with = "lenient_string"
    )]
    pub admin_key: String,
}

/// Administrative reset request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetAllRequest {
    /// Administrative credential.
    #[serde(
        default,
        rename = "adminKey",
        alias = "adminAuth",
        deserialize_with = "lenient_string"
    )]
    pub admin_key: String,
}
