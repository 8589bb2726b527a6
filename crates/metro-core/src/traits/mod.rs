//! Seams between the reservation core and its collaborators.

pub mod publisher;

pub use publisher::{EventPublisher, NoopPublisher};
