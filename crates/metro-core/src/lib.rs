//! # metro-core
//!
//! Core crate for Metro Claim. Contains configuration schemas, the
//! [`Identity`](types::Identity) type, station domain events, the
//! publisher trait the reservation core emits events through, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Metro Claim crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
