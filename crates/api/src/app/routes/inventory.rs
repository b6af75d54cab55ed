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
    Router::new().route("/forecast", post(forecast))
}

/// Forecast next-day usage and stock runway from an inventory CSV (part `file`).
pub async fn forecast(
    Extension(services): Extension<Arc<AppServices>>,
    multipart: Multipart,
) -> Result<axum::response::Response, ApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let file = form.require("file")?;

    let (stored, result) = services.forecast_upload(&file).await?;

    Ok(Json(dto::forecast_to_json(&stored, &result)).into_response())
}
