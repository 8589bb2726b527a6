//! # metro-realtime
//!
//! Real-time engine for Metro Claim. Provides:
//!
//! - The [`Broadcaster`], the registry's event publisher, fanning committed
//!   station events out to every connected observer
//! - Observer registration and tracking for the WebSocket gateway
//! - Lag detection, so a slow observer is resynchronized with a snapshot
//!   instead of silently missing events
//! - Engine-level counters for health reporting

pub mod broadcast;
pub mod connection;
pub mod message;
pub mod metrics;
pub mod server;

pub use broadcast::Broadcaster;
pub use connection::manager::ObserverManager;
pub use message::types::OutboundMessage;
pub use server::RealtimeEngine;
