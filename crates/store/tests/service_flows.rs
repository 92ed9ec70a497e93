//! Service flows wired against the in-memory gateway and event channel.

use std::sync::Arc;

use rust_decimal::Decimal;

use lendstock_categories::CategoryService;
use lendstock_core::{CatalogError, ProductId};
use lendstock_events::{EventPublisher, InMemoryEventPublisher, Published, Subscription};
use lendstock_items::{ItemService, ItemStatus};
use lendstock_products::{ProductMessage, ProductService, UNIT_AVAILABLE_TOPIC};
use lendstock_store::{InMemoryCategoryStore, InMemoryItemStore, InMemoryProductStore};

type Publisher = Arc<InMemoryEventPublisher<ProductMessage>>;

struct Harness {
    categories: Arc<CategoryService<Arc<InMemoryCategoryStore>>>,
    products: Arc<ProductService<Arc<InMemoryProductStore>, Arc<InMemoryCategoryStore>>>,
    items: ItemService<
        Arc<InMemoryItemStore>,
        Arc<InMemoryProductStore>,
        Arc<InMemoryCategoryStore>,
        Publisher,
    >,
    events: Subscription<ProductMessage>,
}

fn harness() -> Harness {
    let publisher: Publisher = Arc::new(InMemoryEventPublisher::new());
    let events = publisher.subscribe();

    let categories = Arc::new(CategoryService::new(Arc::new(InMemoryCategoryStore::new())));
    let products = Arc::new(ProductService::new(
        Arc::new(InMemoryProductStore::new()),
        categories.clone(),
    ));
    let items = ItemService::new(
        Arc::new(InMemoryItemStore::new()),
        products.clone(),
        publisher,
    );

    Harness {
        categories,
        products,
        items,
        events,
    }
}

fn drain(events: &Subscription<ProductMessage>) -> Vec<Published<ProductMessage>> {
    let mut drained = Vec::new();
    while let Ok(published) = events.try_recv() {
        drained.push(published);
    }
    drained
}

fn daily_price() -> Decimal {
    Decimal::new(999, 2)
}

#[test]
fn create_item_publishes_one_availability_message() {
    let h = harness();
    let drill = h
        .products
        .create_product(None, "Drill", None, daily_price(), None, None)
        .unwrap();
    let drill_id = drill.id.unwrap();

    let item = h.items.create_item(drill_id, "SN-1").unwrap();

    assert_eq!(item.status, ItemStatus::Operational);
    let published = drain(&h.events);
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].topic, UNIT_AVAILABLE_TOPIC);
    assert_eq!(published[0].message.product_id, drill_id);
}

#[test]
fn create_item_for_unknown_product_fails_without_publishing() {
    let h = harness();
    let missing = ProductId::new();

    let err = h.items.create_item(missing, "SN-1").unwrap_err();

    match err {
        CatalogError::ProductNotFound(id) => assert_eq!(id, missing),
        other => panic!("expected ProductNotFound, got {other:?}"),
    }
    assert!(h.items.find_by_serial("SN-1").is_none());
    assert!(drain(&h.events).is_empty());
}

#[test]
fn redundant_transitions_neither_mutate_nor_publish() {
    let h = harness();
    let drill = h
        .products
        .create_product(None, "Drill", None, daily_price(), None, None)
        .unwrap();
    h.items.create_item(drill.id.unwrap(), "SN-1").unwrap();
    drain(&h.events);

    // Already operational: enabling again is rejected.
    let err = h.items.set_operational("SN-1", true).unwrap_err();
    assert!(matches!(err, CatalogError::RedundantTransition(_)));
    assert_eq!(
        h.items.find_by_serial("SN-1").unwrap().status,
        ItemStatus::Operational
    );
    assert!(drain(&h.events).is_empty());

    // Already non-operational: disabling again is rejected.
    h.items.set_operational("SN-1", false).unwrap();
    drain(&h.events);
    let err = h.items.set_operational("SN-1", false).unwrap_err();
    assert!(matches!(err, CatalogError::RedundantTransition(_)));
    assert!(drain(&h.events).is_empty());
}

#[test]
fn only_the_flip_back_to_operational_publishes() {
    let h = harness();
    let drill = h
        .products
        .create_product(None, "Drill", None, daily_price(), None, None)
        .unwrap();
    let drill_id = drill.id.unwrap();
    h.items.create_item(drill_id, "SN-1").unwrap();
    drain(&h.events);

    let item = h.items.set_operational("SN-1", false).unwrap();
    assert_eq!(item.status, ItemStatus::NonOperational);
    assert!(drain(&h.events).is_empty());

    let item = h.items.set_operational("SN-1", true).unwrap();
    assert_eq!(item.status, ItemStatus::Operational);
    let published = drain(&h.events);
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].message.product_id, drill_id);
}

#[test]
fn set_operational_on_unknown_serial_fails() {
    let h = harness();

    let err = h.items.set_operational("SN-unknown", true).unwrap_err();

    match err {
        CatalogError::ItemNotFound(serial) => assert_eq!(serial, "SN-unknown"),
        other => panic!("expected ItemNotFound, got {other:?}"),
    }
    assert!(drain(&h.events).is_empty());
}

#[test]
fn catalog_end_to_end_rental_flow() {
    let h = harness();

    let tools = h
        .categories
        .create_category(None, "Tools", Some("desc".to_string()))
        .unwrap();

    let drill = h
        .products
        .create_product(tools.id, "Drill", None, daily_price(), None, None)
        .unwrap();
    let drill_id = drill.id.unwrap();
    assert_eq!(drill.category_id, tools.id);

    let item = h.items.create_item(drill_id, "SN-1").unwrap();
    assert_eq!(item.status, ItemStatus::Operational);
    let published = drain(&h.events);
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].message.product_id, drill_id);

    let item = h.items.set_operational("SN-1", false).unwrap();
    assert_eq!(item.status, ItemStatus::NonOperational);
    assert!(drain(&h.events).is_empty());

    let err = h.items.set_operational("SN-1", false).unwrap_err();
    assert!(matches!(err, CatalogError::RedundantTransition(_)));
    assert!(drain(&h.events).is_empty());
}

#[test]
fn category_name_race_is_caught_by_the_store_constraint() {
    let h = harness();
    h.categories.create_category(None, "Tools", None).unwrap();

    // Same-name create after the fact behaves like the losing side of a
    // concurrent race: the duplicate kind is identical either way.
    let err = h.categories.create_category(None, "Tools", None).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName(_)));
}
