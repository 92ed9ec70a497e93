//! Catalog error model.

use thiserror::Error;

use crate::id::{CategoryId, ProductId};

/// Result type used across the catalog service layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Keep this focused on deterministic, business/domain failures (uniqueness,
/// reference resolution, transition legality). Transport concerns belong to
/// the HTTP boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A category with the same name already exists anywhere in the hierarchy.
    #[error("category already exists: {0}")]
    DuplicateName(String),

    /// The supplied parent category id does not resolve.
    #[error("parent category not found: {0}")]
    ParentNotFound(CategoryId),

    /// A product matching the supplied name/category pair already exists.
    #[error("product already exists: {0}")]
    DuplicateProduct(String),

    /// The referenced product does not exist.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// No item carries the given serial number.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// The requested status equals the current status.
    #[error("{0}")]
    RedundantTransition(String),
}

impl CatalogError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn duplicate_product(name: impl Into<String>) -> Self {
        Self::DuplicateProduct(name.into())
    }

    pub fn item_not_found(serial: impl Into<String>) -> Self {
        Self::ItemNotFound(serial.into())
    }

    pub fn redundant_transition(msg: impl Into<String>) -> Self {
        Self::RedundantTransition(msg.into())
    }
}

/// Unique-constraint violation surfaced by a store backend.
///
/// A race between two concurrent creates can pass the in-service uniqueness
/// check and collide at save time; the service maps this onto the same
/// duplicate error kind as the in-service check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unique constraint violated: {field}")]
pub struct UniqueViolation {
    pub field: &'static str,
}

impl UniqueViolation {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}
