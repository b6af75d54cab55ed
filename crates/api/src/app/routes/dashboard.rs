use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::app::dto::UploadForm;
use crate::app::errors::ApiError;
use crate::app::render::{self, PageModel};
use crate::app::services::AppServices;

pub async fn index() -> Html<String> {
    Html(render::page(&PageModel::default()))
}

/// Handle the upload form. Either file may be omitted; any failure replaces
/// the whole result with an error message.
pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    multipart: Multipart,
) -> axum::response::Response {
    match evaluate(&services, multipart).await {
        Ok(model) => (StatusCode::OK, Html(render::page(&model))).into_response(),
        Err(e) => {
            let (status, code) = e.status_and_code();
            tracing::warn!(%status, code, "upload form rejected: {e}");
            (status, Html(render::page(&PageModel::error(e.to_string())))).into_response()
        }
    }
}

async fn evaluate(services: &AppServices, multipart: Multipart) -> Result<PageModel, ApiError> {
    let mut form = UploadForm::read(multipart).await?;
    let mut model = PageModel::default();

    if let Some(file) = form.take("inventory_file") {
        let (_, result) = services.forecast_upload(&file).await?;
        model.forecast = Some(result);
    }

    if let Some(file) = form.take("labour_file") {
        let (_, result) = services.wages_upload(&file).await?;
        model.wages = Some(result);
    }

    Ok(model)
}
