use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use brewhall_auth::Role;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new().route("/", get(get_tax_rate).put(set_tax_rate))
}

/// Any authenticated caller may read the rate (the frontend needs it to show
/// totals regardless of role).
pub async fn get_tax_rate(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.tax.get_rate() {
        Ok(rate) => (StatusCode::OK, Json(serde_json::json!({ "rate": rate }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn set_tax_rate(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::SetTaxRateRequest>,
) -> axum::response::Response {
    if let Err(e) = authz::require_any_role(&principal, &[Role::admin()]) {
        return errors::domain_error_to_response(e);
    }

    match services.tax.set_rate(body.rate) {
        Ok(rate) => (StatusCode::OK, Json(serde_json::json!({ "rate": rate }))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
