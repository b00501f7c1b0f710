use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use brewhall_auth::Role;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/", post(create_user).get(list_users))
}

/// Admin creates staff and customer accounts.
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::admin()]) {
        return errors::domain_error_to_response(e);
    }

    let roles: Vec<Role> = body.roles.into_iter().map(Role::new).collect();

    match services
        .users
        .create_user(&body.name, &body.username, &body.email, roles)
    {
        Ok(account) => (StatusCode::CREATED, Json(dto::user_to_json(&account))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::admin()]) {
        return errors::domain_error_to_response(e);
    }

    match services.users.list_users() {
        Ok(users) => {
            let items: Vec<_> = users.iter().map(dto::user_to_json).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
