use axum::Router;

pub mod categories;
pub mod items;
pub mod products;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/items", items::router())
}
