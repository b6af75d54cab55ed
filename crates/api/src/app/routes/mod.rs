use axum::{routing::get, Router};

pub mod dashboard;
pub mod inventory;
pub mod labour;
pub mod system;

/// Router for the upload page and the calculation endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(dashboard::index).post(dashboard::submit))
        .nest("/api/inventory", inventory::router())
        .nest("/api/labour", labour::router())
}
