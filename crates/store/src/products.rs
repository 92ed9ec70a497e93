use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use lendstock_core::{CategoryId, ProductId, UniqueViolation};
use lendstock_products::{Product, ProductStore};

/// In-memory product collection.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, id: ProductId) -> Option<Product> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&id).cloned()
    }

    fn save(&self, mut product: Product) -> Result<Product, UniqueViolation> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let id = product.id.unwrap_or_else(ProductId::new);
        product.id = Some(id);

        map.insert(id, product.clone());
        Ok(product)
    }

    fn delete(&self, id: ProductId) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.remove(&id);
    }

    fn list(&self) -> Vec<Product> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values().cloned().collect()
    }

    fn find_matching(&self, name: Option<&str>, category_id: Option<CategoryId>) -> Vec<Product> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        if name.is_none() && category_id.is_none() {
            return map.values().cloned().collect();
        }

        // A row matches on either supplied condition; this one filter backs
        // both listing and the creation-time duplicate guard.
        map.values()
            .filter(|p| {
                name.is_some_and(|n| p.name == n)
                    || category_id.is_some_and(|c| p.category_id == Some(c))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str, category_id: Option<CategoryId>) -> Product {
        let mut product = Product::new(name, None, Decimal::new(999, 2), None, None);
        product.category_id = category_id;
        product
    }

    #[test]
    fn find_matching_without_filters_returns_all() {
        let store = InMemoryProductStore::new();
        store.save(product("Drill", None)).unwrap();
        store.save(product("Sander", None)).unwrap();

        assert_eq!(store.find_matching(None, None).len(), 2);
    }

    #[test]
    fn find_matching_hits_on_either_condition() {
        let store = InMemoryProductStore::new();
        let category = CategoryId::new();
        store.save(product("Drill", Some(category))).unwrap();

        assert_eq!(store.find_matching(Some("Drill"), None).len(), 1);
        assert_eq!(store.find_matching(None, Some(category)).len(), 1);
        assert_eq!(
            store.find_matching(Some("Sander"), Some(category)).len(),
            1
        );
        assert!(
            store
                .find_matching(Some("Sander"), Some(CategoryId::new()))
                .is_empty()
        );
    }

    #[test]
    fn delete_is_idempotent() {
        let store = InMemoryProductStore::new();
        let saved = store.save(product("Drill", None)).unwrap();
        let id = saved.id.unwrap();

        store.delete(id);
        store.delete(id);
        assert!(store.get(id).is_none());
    }
}
