use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lendstock_core::{CategoryId, Entity, ProductId, UniqueViolation};

/// Topic on which "a unit of this product became available" messages are
/// published.
pub const UNIT_AVAILABLE_TOPIC: &str = "product.unitAvailable";

/// Rentable product definition.
///
/// Products are created once and optionally linked to a category; they are
/// never updated, only deleted by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Surrogate id, assigned by the store on first save.
    pub id: Option<ProductId>,
    pub name: String,
    pub description: Option<String>,
    /// Rental price per day. Documented non-negative; not validated here.
    pub daily_price: Decimal,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// Owning category, if one resolved at creation time.
    pub category_id: Option<CategoryId>,
}

impl Product {
    /// Build a not-yet-persisted product (no id, no category link).
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        daily_price: Decimal,
        brand: Option<String>,
        model: Option<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            daily_price,
            brand,
            model,
            category_id: None,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<ProductId> {
        self.id
    }
}

/// Message published when a rentable unit of a product becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMessage {
    pub product_id: ProductId,
}

/// Persistence port for products.
pub trait ProductStore: Send + Sync {
    fn get(&self, id: ProductId) -> Option<Product>;

    fn save(&self, product: Product) -> Result<Product, UniqueViolation>;

    /// Unconditional delete; a no-op for an unknown id.
    fn delete(&self, id: ProductId);

    fn list(&self) -> Vec<Product>;

    /// Combined name/category filter.
    ///
    /// With no filter supplied every row matches. Otherwise a row matches
    /// when its name equals the supplied name OR its category equals the
    /// supplied category. The same filter backs both listing and the
    /// duplicate guard, so a single hit on either condition blocks creation.
    fn find_matching(&self, name: Option<&str>, category_id: Option<CategoryId>) -> Vec<Product>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn save(&self, product: Product) -> Result<Product, UniqueViolation> {
        (**self).save(product)
    }

    fn delete(&self, id: ProductId) {
        (**self).delete(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn find_matching(&self, name: Option<&str>, category_id: Option<CategoryId>) -> Vec<Product> {
        (**self).find_matching(name, category_id)
    }
}
