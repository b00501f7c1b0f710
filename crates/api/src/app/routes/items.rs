use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use brewhall_auth::Role;
use brewhall_core::ItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(add_item).get(list_items))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

fn parse_item_id(id: &str) -> Result<ItemId, axum::response::Response> {
    id.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }

    match services
        .catalog
        .add_item(&body.name, &body.description, body.price)
    {
        Ok(item) => (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff(), Role::customer()]) {
        return errors::domain_error_to_response(e);
    }

    match services.catalog.list_items() {
        Ok(items) => {
            let items: Vec<_> = items.iter().map(dto::item_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff(), Role::customer()]) {
        return errors::domain_error_to_response(e);
    }
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services.catalog.get_item(id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services
        .catalog
        .update_item(id, &body.name, &body.description, body.price)
    {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }
    let id = match parse_item_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services.catalog.delete_item(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
