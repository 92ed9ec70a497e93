use std::sync::Arc;

use lendstock_categories::CategoryStore;
use lendstock_core::{CatalogError, CatalogResult, ProductId};
use lendstock_events::EventPublisher;
use lendstock_products::{ProductMessage, ProductService, ProductStore, UNIT_AVAILABLE_TOPIC};

use crate::item::{Item, ItemStatus, ItemStore};

/// Item business operations: creation and the operational state machine.
///
/// Depends on the product service to validate product existence and on the
/// event publisher to signal availability; both injected at construction.
pub struct ItemService<S, P, C, B> {
    store: S,
    products: Arc<ProductService<P, C>>,
    publisher: B,
}

impl<S, P, C, B> ItemService<S, P, C, B>
where
    S: ItemStore,
    P: ProductStore,
    C: CategoryStore,
    B: EventPublisher<ProductMessage>,
{
    pub fn new(store: S, products: Arc<ProductService<P, C>>, publisher: B) -> Self {
        Self {
            store,
            products,
            publisher,
        }
    }

    pub fn find_all(&self) -> Vec<Item> {
        self.store.list()
    }

    pub fn find_by_serial(&self, serial_number: &str) -> Option<Item> {
        self.store.get(serial_number)
    }

    /// Create a unit for an existing product.
    ///
    /// New units always start operational, whatever the caller asked for,
    /// and creation always signals availability: it is an initial
    /// assignment, not a transition.
    pub fn create_item(
        &self,
        product_id: ProductId,
        serial_number: impl Into<String>,
    ) -> CatalogResult<Item> {
        if self.products.find_by_id(product_id).is_none() {
            return Err(CatalogError::ProductNotFound(product_id));
        }

        let item = self.store.save(Item::new(product_id, serial_number));

        self.notify_unit_available(product_id);

        Ok(item)
    }

    /// Flip an item's operational status.
    ///
    /// Same-state requests are rejected without mutation or notification; a
    /// flip that lands on OPERATIONAL signals availability, a flip to
    /// NON_OPERATIONAL never does.
    pub fn set_operational(&self, serial_number: &str, operational: bool) -> CatalogResult<Item> {
        let mut item = self
            .store
            .get(serial_number)
            .ok_or_else(|| CatalogError::item_not_found(serial_number))?;

        item.set_operational(operational)?;

        let item = self.store.save(item);

        if item.status == ItemStatus::Operational {
            self.notify_unit_available(item.product_id);
        }

        Ok(item)
    }

    /// Best-effort availability signal: a failed publish is logged and
    /// dropped, never surfaced and never rolled back.
    fn notify_unit_available(&self, product_id: ProductId) {
        if let Err(err) = self
            .publisher
            .publish(UNIT_AVAILABLE_TOPIC, ProductMessage { product_id })
        {
            tracing::warn!(?err, %product_id, "failed to publish unit-available message");
        }
    }
}
