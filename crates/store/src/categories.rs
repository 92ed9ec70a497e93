use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use lendstock_categories::{Category, CategoryStore};
use lendstock_core::{CategoryId, UniqueViolation};

/// In-memory category collection.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    inner: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn get(&self, id: CategoryId) -> Option<Category> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&id).cloned()
    }

    fn save(&self, mut category: Category) -> Result<Category, UniqueViolation> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let id = category.id.unwrap_or_else(CategoryId::new);
        category.id = Some(id);

        // Storage-level unique constraint on the name; the service maps this
        // onto the same duplicate error kind as its own pre-check.
        if map
            .values()
            .any(|existing| existing.name == category.name && existing.id != category.id)
        {
            return Err(UniqueViolation::new("name"));
        }

        map.insert(id, category.clone());
        Ok(category)
    }

    fn list(&self) -> Vec<Category> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values().cloned().collect()
    }

    fn find_matching(&self, name: Option<&str>, description: Option<&str>) -> Vec<Category> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values()
            .filter(|c| name.is_none_or(|n| c.name == n))
            .filter(|c| description.is_none_or(|d| c.description.as_deref() == Some(d)))
            .cloned()
            .collect()
    }

    fn find_by_parent(&self, parent_id: CategoryId) -> Vec<Category> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.values()
            .filter(|c| c.parent_id == Some(parent_id))
            .cloned()
            .collect()
    }
}
