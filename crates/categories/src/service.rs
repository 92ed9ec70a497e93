use lendstock_core::{CatalogError, CatalogResult, CategoryId};

use crate::category::{Category, CategoryStore};

/// Category business operations.
///
/// Enforces global name uniqueness (the check ignores description and
/// parent) and parent existence. Collaborators are injected at construction.
pub struct CategoryService<S> {
    store: S,
}

impl<S> CategoryService<S>
where
    S: CategoryStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Categories matching all supplied filters; exact match, not substring.
    pub fn find_all(&self, name: Option<&str>, description: Option<&str>) -> Vec<Category> {
        self.store.find_matching(name, description)
    }

    pub fn find_by_id(&self, id: CategoryId) -> Option<Category> {
        self.store.get(id)
    }

    /// Direct children of `parent_id`; empty for a leaf or an unknown id.
    pub fn find_by_parent(&self, parent_id: CategoryId) -> Vec<Category> {
        self.store.find_by_parent(parent_id)
    }

    pub fn create_category(
        &self,
        parent_id: Option<CategoryId>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> CatalogResult<Category> {
        let name = name.into();

        if !self.store.find_matching(Some(&name), None).is_empty() {
            return Err(CatalogError::duplicate_name(name));
        }

        let mut category = Category::new(name.clone(), description);

        if let Some(parent_id) = parent_id {
            match self.store.get(parent_id) {
                Some(parent) => category.parent_id = parent.id,
                None => return Err(CatalogError::ParentNotFound(parent_id)),
            }
        }

        // A concurrent create with the same name can slip past the check
        // above; the store's own constraint maps to the same error kind.
        self.store
            .save(category)
            .map_err(|_| CatalogError::duplicate_name(name))
    }
}
