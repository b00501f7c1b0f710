use axum::{routing::get, Router};

pub mod inventory;
pub mod items;
pub mod orders;
pub mod system;
pub mod taxrate;
pub mod users;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/orders", orders::router())
        .nest("/items", items::router())
        .nest("/inventory", inventory::router())
        .nest("/taxRate", taxrate::router())
        .nest("/users", users::router())
}
