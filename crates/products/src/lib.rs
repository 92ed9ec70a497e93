//! Products domain module.
//!
//! Rentable product definitions: uniqueness rules, optional category
//! resolution, and the availability message published when a unit of a
//! product becomes rentable.

pub mod product;
pub mod service;

pub use product::{Product, ProductMessage, ProductStore, UNIT_AVAILABLE_TOPIC};
pub use service::ProductService;
