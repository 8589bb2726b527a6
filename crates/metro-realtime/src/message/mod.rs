//! WebSocket message definitions.

pub mod types;
