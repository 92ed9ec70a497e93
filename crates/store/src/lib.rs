//! In-memory persistence gateway for tests/dev.
//!
//! Implements the store ports of the three domain crates on top of
//! `RwLock<HashMap>`. Surrogate ids are assigned on first save; the
//! category store enforces its own name-unique constraint at save time,
//! backing up the in-service check against concurrent creates.

pub mod categories;
pub mod items;
pub mod products;

pub use categories::InMemoryCategoryStore;
pub use items::InMemoryItemStore;
pub use products::InMemoryProductStore;
