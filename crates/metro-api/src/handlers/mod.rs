//! Request handlers organized by domain.

pub mod admin;
pub mod health;
pub mod stations;
pub mod ws;
