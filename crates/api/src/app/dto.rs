use axum::body::Bytes;
use axum::extract::Multipart;

use siteledger_inventory::ForecastResult;
use siteledger_labour::WageResult;

use crate::app::errors::ApiError;
use crate::app::uploads::StoredUpload;

// -------------------------
// Request DTOs
// -------------------------

/// One file part of a multipart form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub field: String,
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Browsers submit an unnamed, empty part when no file was chosen.
    pub fn is_unselected(&self) -> bool {
        self.file_name.is_empty() && self.bytes.is_empty()
    }
}

/// All non-empty parts of a multipart form, by field name.
#[derive(Debug, Default)]
pub struct UploadForm {
    files: Vec<UploadedFile>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut files = Vec::new();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;

            let file = UploadedFile {
                field: name,
                file_name,
                bytes,
            };
            if !file.is_unselected() {
                files.push(file);
            }
        }

        Ok(Self { files })
    }

    /// Remove and return the first part named `field`.
    pub fn take(&mut self, field: &str) -> Option<UploadedFile> {
        let idx = self.files.iter().position(|f| f.field == field)?;
        Some(self.files.remove(idx))
    }

    pub fn require(&mut self, field: &'static str) -> Result<UploadedFile, ApiError> {
        self.take(field).ok_or(ApiError::MissingFile(field))
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn forecast_to_json(upload: &StoredUpload, rm: &ForecastResult) -> serde_json::Value {
    serde_json::json!({
        "upload": upload,
        "predicted_usage": rm.predicted_usage,
        "days_left": rm.days_left,
        "trend": {
            "slope": rm.trend.slope,
            "intercept": rm.trend.intercept,
        },
        "average_daily_usage": rm.average_daily_usage,
        "current_stock": rm.current_stock,
        "next_day_index": rm.next_day_index,
        "sample_count": rm.sample_count,
    })
}

pub fn wages_to_json(upload: &StoredUpload, rm: &WageResult) -> serde_json::Value {
    serde_json::json!({
        "upload": upload,
        "lines": rm.lines.iter().map(|l| serde_json::json!({
            "name": l.name,
            "profession": l.profession,
            "monthly_wage": l.monthly_wage,
        })).collect::<Vec<_>>(),
        "total_labour_cost": rm.total_labour_cost,
    })
}
