//! HTTP application wiring (axum router + service wiring).
//!
//! - `services.rs`: store + service construction and startup seeding
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use brewhall_auth::{Hs256TokenValidator, TokenValidator};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(jwt_secret: String) -> Router {
    let tokens: Arc<dyn TokenValidator> =
        Arc::new(Hs256TokenValidator::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { tokens };

    let services = Arc::new(services::build_services());

    // Protected routes: require a valid bearer token.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
