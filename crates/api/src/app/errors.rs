use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use lendstock_core::CatalogError;

/// Map a catalog error onto a transport status + stable error code.
///
/// Duplicates and same-state transitions are conflicts; references that fail
/// to resolve at creation time are unprocessable; lookup misses are 404s.
pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        CatalogError::DuplicateName(_) => {
            json_error(StatusCode::CONFLICT, "duplicate_name", message)
        }
        CatalogError::DuplicateProduct(_) => {
            json_error(StatusCode::CONFLICT, "duplicate_product", message)
        }
        CatalogError::RedundantTransition(_) => {
            json_error(StatusCode::CONFLICT, "redundant_transition", message)
        }
        CatalogError::ParentNotFound(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "parent_not_found", message)
        }
        CatalogError::ProductNotFound(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "product_not_found", message)
        }
        CatalogError::ItemNotFound(_) => json_error(StatusCode::NOT_FOUND, "item_not_found", message),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
