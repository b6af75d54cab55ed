//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: per-request calculation pipeline (store upload, ingest, calculate)
//! - `uploads.rs`: upload directory storage
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: multipart request mapping and JSON response mapping
//! - `render.rs`: the HTML upload page
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod render;
pub mod routes;
pub mod services;
pub mod uploads;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Creates the upload directory if it does not exist yet.
pub async fn build_app(config: AppConfig) -> Result<Router, errors::ApiError> {
    let services = Arc::new(services::AppServices::new(&config).await?);

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        max_upload_bytes = config.max_upload_bytes,
        "application configured"
    );

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        ))
}
