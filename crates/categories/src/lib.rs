//! Categories domain module.
//!
//! Hierarchical catalog categories: business rules for name uniqueness and
//! parent resolution, plus the persistence port the service talks to.

pub mod category;
pub mod service;

pub use category::{Category, CategoryStore};
pub use service::CategoryService;
