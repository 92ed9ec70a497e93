use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:serial_number", get(get_item).patch(update_item_status))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    tracing::trace!("list_items");

    let items = services
        .items
        .find_all()
        .into_iter()
        .map(dto::item_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(serial_number): Path<String>,
) -> axum::response::Response {
    tracing::trace!("get_item");

    match services.items.find_by_serial(&serial_number) {
        Some(item) => (StatusCode::OK, Json(dto::item_to_json(item))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    tracing::trace!("create_item");

    let item = match services.items.create_item(body.product_id, body.serial_number) {
        Ok(i) => i,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    (
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/items/{}", item.serial_number),
        )],
        Json(serde_json::json!({ "serial_number": item.serial_number })),
    )
        .into_response()
}

/// Flip an item's operational status; the body is a bare JSON boolean.
pub async fn update_item_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(serial_number): Path<String>,
    Json(operational): Json<bool>,
) -> axum::response::Response {
    tracing::trace!("update_item_status");

    match services.items.set_operational(&serial_number, operational) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(item))).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}
