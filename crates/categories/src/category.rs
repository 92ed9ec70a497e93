use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lendstock_core::{CategoryId, Entity, UniqueViolation};

/// Catalog category.
///
/// Categories form a tree: zero or one parent, many children. The parent link
/// is set at creation only; categories are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Surrogate id, assigned by the store on first save.
    pub id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    /// Direct parent, if any.
    pub parent_id: Option<CategoryId>,
}

impl Category {
    /// Build a not-yet-persisted category (no id, no parent link).
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            parent_id: None,
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Option<CategoryId> {
        self.id
    }
}

/// Persistence port for categories.
///
/// `save` assigns the surrogate id on first save and may reject a write that
/// violates the backend's own name-unique constraint.
pub trait CategoryStore: Send + Sync {
    fn get(&self, id: CategoryId) -> Option<Category>;

    fn save(&self, category: Category) -> Result<Category, UniqueViolation>;

    fn list(&self) -> Vec<Category>;

    /// Exact-match lookup; an absent filter imposes no constraint on that
    /// field, supplied filters must all hold.
    fn find_matching(&self, name: Option<&str>, description: Option<&str>) -> Vec<Category>;

    /// Direct children of `parent_id` (one level only).
    fn find_by_parent(&self, parent_id: CategoryId) -> Vec<Category>;
}

impl<S> CategoryStore for Arc<S>
where
    S: CategoryStore + ?Sized,
{
    fn get(&self, id: CategoryId) -> Option<Category> {
        (**self).get(id)
    }

    fn save(&self, category: Category) -> Result<Category, UniqueViolation> {
        (**self).save(category)
    }

    fn list(&self) -> Vec<Category> {
        (**self).list()
    }

    fn find_matching(&self, name: Option<&str>, description: Option<&str>) -> Vec<Category> {
        (**self).find_matching(name, description)
    }

    fn find_by_parent(&self, parent_id: CategoryId) -> Vec<Category> {
        (**self).find_by_parent(parent_id)
    }
}
