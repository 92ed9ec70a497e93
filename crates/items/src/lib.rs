//! Items domain module.
//!
//! Physical rental units of a product, identified by serial number. An item
//! is either operational (rentable) or non-operational; becoming operational
//! publishes an availability notification for the owning product.

pub mod item;
pub mod service;

pub use item::{Item, ItemStatus, ItemStore};
pub use service::ItemService;
