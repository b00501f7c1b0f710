use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use brewhall_auth::Role;
use brewhall_core::OrderId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(place_order).get(get_all_orders))
        .route("/customer", get(get_orders_for_current_user))
        .route("/history", get(view_order_history))
        .route("/:id", get(get_order))
        .route("/cancel/:id", delete(cancel_order))
        .route("/fulfill/:id", put(fulfill_order))
        .route("/pickup/:id", put(pickup_order))
}

fn parse_order_id(id: &str) -> Result<OrderId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id")
    })
}

pub async fn place_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::PlaceOrderRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::customer()]) {
        return errors::domain_error_to_response(e);
    }

    match services
        .orders
        .place_order(principal.username(), body.items, body.tip)
    {
        Ok(order) => (StatusCode::CREATED, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_all_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }

    match services.orders.get_all_orders() {
        Ok(orders) => {
            let items: Vec<_> = orders.iter().map(dto::order_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Customers see their own orders; the customer is resolved from the token,
/// never from the request.
pub async fn get_orders_for_current_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::customer()]) {
        return errors::domain_error_to_response(e);
    }

    let account = match services.users.find_by_identifier(principal.username()) {
        Ok(account) => account,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.get_orders_for_customer(account.id()) {
        Ok(orders) => {
            let items: Vec<_> = orders.iter().map(dto::order_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }
    let id = match parse_order_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services.orders.get_order(id) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn cancel_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }
    let id = match parse_order_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services.orders.cancel_order(id) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn fulfill_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }
    let id = match parse_order_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services.orders.fulfill_order(id) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn pickup_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }
    let id = match parse_order_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match services.orders.pickup_order(id) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn view_order_history(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Query(query): Query<dto::HistoryQuery>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::staff()]) {
        return errors::domain_error_to_response(e);
    }

    match services.orders.view_order_history(query.item_name.as_deref()) {
        Ok(orders) => {
            let items: Vec<_> = orders.iter().map(dto::order_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
