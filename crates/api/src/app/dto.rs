use rust_decimal::Decimal;
use serde::Deserialize;

use lendstock_categories::Category;
use lendstock_core::{CategoryId, ProductId};
use lendstock_items::Item;
use lendstock_products::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub parent_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub daily_price: Decimal,
    pub brand: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub name: Option<String>,
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub product_id: ProductId,
    pub serial_number: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn category_to_json(category: Category) -> serde_json::Value {
    serde_json::json!({
        "id": category.id.map(|id| id.to_string()),
        "name": category.name,
        "description": category.description,
        "parent_id": category.parent_id.map(|id| id.to_string()),
    })
}

pub fn product_to_json(product: Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.map(|id| id.to_string()),
        "name": product.name,
        "description": product.description,
        "daily_price": product.daily_price,
        "brand": product.brand,
        "model": product.model,
        "category_id": product.category_id.map(|id| id.to_string()),
    })
}

pub fn item_to_json(item: Item) -> serde_json::Value {
    serde_json::json!({
        "serial_number": item.serial_number,
        "product_id": item.product_id.to_string(),
        "status": item.status,
    })
}
