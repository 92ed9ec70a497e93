//! Event publishing for catalog notifications.
//!
//! The catalog emits "a unit of this product became available" notifications
//! on a named topic. This crate holds the transport-agnostic publishing
//! contract and an in-memory channel used by tests and dev deployments.

pub mod in_memory;
pub mod publisher;

pub use in_memory::{InMemoryEventPublisher, InMemoryPublishError};
pub use publisher::{EventPublisher, Published, Subscription};
