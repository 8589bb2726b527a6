//! Custom Axum extractors.

pub mod identity;
pub mod json;

pub use identity::ClientIdentity;
pub use json::JsonBody;
