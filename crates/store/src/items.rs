use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use lendstock_items::{Item, ItemStore};

/// In-memory item collection, keyed by serial number.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<HashMap<String, Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryItemStore {
    fn get(&self, serial_number: &str) -> Option<Item> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(serial_number).cloned()
    }

    fn save(&self, item: Item) -> Item {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(item.serial_number.clone(), item.clone());
        item
    }

    fn list(&self) -> Vec<Item> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values().cloned().collect()
    }
}
