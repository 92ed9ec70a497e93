use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lendstock_core::{CatalogError, CatalogResult, Entity, ProductId};

/// Operational status of a rental unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Operational,
    NonOperational,
}

/// Physical rental unit of a product.
///
/// Identified by its serial number (business key, globally unique). The
/// product reference is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub serial_number: String,
    pub product_id: ProductId,
    pub status: ItemStatus,
}

impl Item {
    /// Build a new unit. New units always start operational.
    pub fn new(product_id: ProductId, serial_number: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into(),
            product_id,
            status: ItemStatus::Operational,
        }
    }

    /// Flip the operational status.
    ///
    /// Requesting the status the item already has is rejected without
    /// mutation; only OPERATIONAL <-> NON_OPERATIONAL flips are legal.
    pub fn set_operational(&mut self, operational: bool) -> CatalogResult<()> {
        match (self.status, operational) {
            (ItemStatus::Operational, true) => Err(CatalogError::redundant_transition(
                "item is already operational",
            )),
            (ItemStatus::NonOperational, false) => Err(CatalogError::redundant_transition(
                "item is already non-operational",
            )),
            (_, true) => {
                self.status = ItemStatus::Operational;
                Ok(())
            }
            (_, false) => {
                self.status = ItemStatus::NonOperational;
                Ok(())
            }
        }
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> Option<String> {
        Some(self.serial_number.clone())
    }
}

/// Persistence port for items.
///
/// Items are keyed by serial number; `save` upserts, so the backend's
/// uniqueness of serials holds by construction.
pub trait ItemStore: Send + Sync {
    fn get(&self, serial_number: &str) -> Option<Item>;

    fn save(&self, item: Item) -> Item;

    fn list(&self) -> Vec<Item>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn get(&self, serial_number: &str) -> Option<Item> {
        (**self).get(serial_number)
    }

    fn save(&self, item: Item) -> Item {
        (**self).save(item)
    }

    fn list(&self) -> Vec<Item> {
        (**self).list()
    }
}
