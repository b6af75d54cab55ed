use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::dto::{self, UploadForm};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/wages", post(wages))
}

/// Per-worker monthly wages and total labour cost from a labour CSV (part `file`).
pub async fn wages(
    Extension(services): Extension<Arc<AppServices>>,
    multipart: Multipart,
) -> Result<axum::response::Response, ApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let file = form.require("file")?;

    let (stored, result) = services.wages_upload(&file).await?;

    Ok(Json(dto::wages_to_json(&stored, &result)).into_response())
}
