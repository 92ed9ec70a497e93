use std::sync::Arc;

use rust_decimal::Decimal;

use lendstock_categories::{CategoryService, CategoryStore};
use lendstock_core::{CatalogError, CatalogResult, CategoryId, ProductId};

use crate::product::{Product, ProductStore};

/// Product business operations.
///
/// Depends on the category service to resolve an optional category
/// reference; collaborators are injected at construction.
pub struct ProductService<S, C> {
    store: S,
    categories: Arc<CategoryService<C>>,
}

impl<S, C> ProductService<S, C>
where
    S: ProductStore,
    C: CategoryStore,
{
    pub fn new(store: S, categories: Arc<CategoryService<C>>) -> Self {
        Self { store, categories }
    }

    /// Products matching the store's combined name/category filter.
    pub fn find_all(&self, name: Option<&str>, category_id: Option<CategoryId>) -> Vec<Product> {
        self.store.find_matching(name, category_id)
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.store.get(id)
    }

    pub fn create_product(
        &self,
        category_id: Option<CategoryId>,
        name: impl Into<String>,
        description: Option<String>,
        daily_price: Decimal,
        brand: Option<String>,
        model: Option<String>,
    ) -> CatalogResult<Product> {
        let name = name.into();

        // The duplicate guard reuses the listing filter: an existing row
        // matching the name or the category blocks creation.
        if !self.store.find_matching(Some(&name), category_id).is_empty() {
            return Err(CatalogError::duplicate_product(name));
        }

        let mut product = Product::new(name.clone(), description, daily_price, brand, model);

        if let Some(category_id) = category_id {
            // An unresolvable category is skipped rather than rejected; the
            // product is created without a link.
            if let Some(category) = self.categories.find_by_id(category_id) {
                product.category_id = category.id;
            }
        }

        self.store
            .save(product)
            .map_err(|_| CatalogError::duplicate_product(name))
    }

    /// Unconditional delete by id; absent ids are a no-op, and referencing
    /// items are not checked.
    pub fn delete_product(&self, id: ProductId) {
        self.store.delete(id);
    }
}
