//! Observer connection lifecycle.

pub mod handle;
pub mod manager;
pub mod pool;
pub mod subscription;
