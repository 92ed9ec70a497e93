use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use lendstock_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).delete(delete_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    tracing::trace!("list_products");

    let products = services
        .products
        .find_all(query.name.as_deref(), query.category_id)
        .into_iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(products)).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    tracing::trace!("get_product");

    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };

    match services.products.find_by_id(id) {
        Some(product) => (StatusCode::OK, Json(dto::product_to_json(product))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    tracing::trace!("create_product");

    let product = match services.products.create_product(
        body.category_id,
        body.name,
        body.description,
        body.daily_price,
        body.brand,
        body.model,
    ) {
        Ok(p) => p,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    // The store assigns the id on save.
    let Some(id) = product.id else {
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            "saved product has no id",
        );
    };
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/products/{id}"))],
        Json(serde_json::json!({ "id": id.to_string() })),
    )
        .into_response()
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    tracing::trace!("delete_product");

    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id");
        }
    };

    services.products.delete_product(id);

    StatusCode::NO_CONTENT.into_response()
}
