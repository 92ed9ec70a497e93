use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use lendstock_core::CategoryId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category))
        .route("/:id/subcategories", get(list_subcategories))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListCategoriesQuery>,
) -> axum::response::Response {
    tracing::trace!("list_categories");

    let categories = services
        .categories
        .find_all(query.name.as_deref(), query.description.as_deref())
        .into_iter()
        .map(dto::category_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(categories)).into_response()
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    tracing::trace!("create_category");

    let category = match services
        .categories
        .create_category(body.parent_id, body.name, body.description)
    {
        Ok(c) => c,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    // The store assigns the id on save.
    let Some(id) = category.id else {
        return errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            "saved category has no id",
        );
    };
    (
        StatusCode::CREATED,
        [(header::LOCATION, format!("/categories/{id}"))],
        Json(serde_json::json!({ "id": id.to_string() })),
    )
        .into_response()
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    tracing::trace!("get_category");

    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id");
        }
    };

    match services.categories.find_by_id(id) {
        Some(category) => (StatusCode::OK, Json(dto::category_to_json(category))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "category not found"),
    }
}

pub async fn list_subcategories(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    tracing::trace!("list_subcategories");

    let id: CategoryId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid category id");
        }
    };

    let children = services
        .categories
        .find_by_parent(id)
        .into_iter()
        .map(dto::category_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(children)).into_response()
}
