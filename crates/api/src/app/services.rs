//! Catalog service wiring: stores, event channel, and the three services.

use std::sync::Arc;

use lendstock_categories::CategoryService;
use lendstock_events::InMemoryEventPublisher;
use lendstock_items::ItemService;
use lendstock_products::{ProductMessage, ProductService};
use lendstock_store::{InMemoryCategoryStore, InMemoryItemStore, InMemoryProductStore};

/// Availability channel shared between the item service and subscribers.
pub type Publisher = Arc<InMemoryEventPublisher<ProductMessage>>;

// Type-erased service aliases for the in-memory wiring.
pub type Categories = CategoryService<Arc<InMemoryCategoryStore>>;
pub type Products = ProductService<Arc<InMemoryProductStore>, Arc<InMemoryCategoryStore>>;
pub type Items = ItemService<
    Arc<InMemoryItemStore>,
    Arc<InMemoryProductStore>,
    Arc<InMemoryCategoryStore>,
    Publisher,
>;

/// Shared application services, injected into handlers via `Extension`.
pub struct AppServices {
    pub categories: Arc<Categories>,
    pub products: Arc<Products>,
    pub items: Arc<Items>,
    /// Kept around so callers (and tests) can subscribe to availability
    /// notifications.
    pub publisher: Publisher,
}

/// Wire the full service graph against in-memory collaborators.
pub fn build_services() -> AppServices {
    let publisher: Publisher = Arc::new(InMemoryEventPublisher::new());

    let categories = Arc::new(CategoryService::new(Arc::new(InMemoryCategoryStore::new())));
    let products = Arc::new(ProductService::new(
        Arc::new(InMemoryProductStore::new()),
        categories.clone(),
    ));
    let items = Arc::new(ItemService::new(
        Arc::new(InMemoryItemStore::new()),
        products.clone(),
        publisher.clone(),
    ));

    AppServices {
        categories,
        products,
        items,
        publisher,
    }
}
