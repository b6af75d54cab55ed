use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use siteledger_core::CalcError;

/// Everything a request can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("invalid upload: {0}")]
    Upload(#[from] MultipartError),

    #[error("missing file part `{0}`")]
    MissingFile(&'static str),

    #[error("could not store upload: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Calc(e) => (calc_error_status(e), e.code()),
            ApiError::Upload(e) => (e.status(), "invalid_upload"),
            ApiError::MissingFile(_) => (StatusCode::BAD_REQUEST, "missing_file"),
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = self.status_and_code();
        json_error(status, code, self.to_string())
    }
}

pub fn calc_error_status(err: &CalcError) -> StatusCode {
    match err {
        CalcError::DataFormat(_) => StatusCode::BAD_REQUEST,
        CalcError::EmptyDataset(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CalcError::DivisionByZero(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
