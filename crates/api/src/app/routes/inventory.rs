use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use brewhall_auth::Role;
use brewhall_core::InventoryId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/", get(get_inventory).put(update_inventory))
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }

    match services.inventory.get() {
        Ok(view) => (StatusCode::OK, Json(dto::inventory_to_json(&view))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::UpdateInventoryRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }

    let id: InventoryId = match body.id.parse() {
        Ok(id) => id,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid inventory id")
        }
    };

    match services.inventory.update(id, body.items) {
        Ok(view) => (StatusCode::OK, Json(dto::inventory_to_json(&view))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
