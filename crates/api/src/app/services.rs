//! Calculation pipeline shared by the HTML form and the JSON endpoints.
//!
//! Each call stores the upload, parses it, and runs one calculator on the
//! request's own rows. Nothing here is shared between requests except the
//! upload directory.

use siteledger_ingest::{read_inventory_csv, read_labour_csv};
use siteledger_inventory::{forecast, ForecastResult};
use siteledger_labour::{calculate_wages, WageResult};

use crate::app::dto::UploadedFile;
use crate::app::errors::ApiError;
use crate::app::uploads::{StoredUpload, UploadStore};
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct AppServices {
    uploads: UploadStore,
}

impl AppServices {
    pub async fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let uploads = UploadStore::open(&config.upload_dir).await.inspect_err(|e| {
            tracing::error!(upload_dir = %config.upload_dir.display(), "cannot create upload directory: {e}");
        })?;
        Ok(Self { uploads })
    }

    pub async fn forecast_upload(
        &self,
        file: &UploadedFile,
    ) -> Result<(StoredUpload, ForecastResult), ApiError> {
        let stored = self.store(file).await?;

        let result = read_inventory_csv(&file.bytes)
            .and_then(|rows| forecast(&rows))
            .inspect_err(|e| {
                tracing::warn!(upload_id = %stored.id, error = %e, "inventory forecast rejected");
            })?;

        tracing::info!(
            upload_id = %stored.id,
            rows = result.sample_count,
            predicted_usage = result.predicted_usage,
            days_left = result.days_left,
            "inventory forecast computed"
        );

        Ok((stored, result))
    }

    pub async fn wages_upload(
        &self,
        file: &UploadedFile,
    ) -> Result<(StoredUpload, WageResult), ApiError> {
        let stored = self.store(file).await?;

        let result = read_labour_csv(&file.bytes)
            .and_then(|rows| calculate_wages(&rows))
            .inspect_err(|e| {
                tracing::warn!(upload_id = %stored.id, error = %e, "labour wages rejected");
            })?;

        tracing::info!(
            upload_id = %stored.id,
            rows = result.lines.len(),
            total_labour_cost = result.total_labour_cost,
            "labour wages computed"
        );

        Ok((stored, result))
    }

    async fn store(&self, file: &UploadedFile) -> Result<StoredUpload, ApiError> {
        self.uploads
            .save(&file.file_name, &file.bytes)
            .await
            .inspect_err(|e| tracing::error!(field = %file.field, "failed to store upload: {e}"))
            .map_err(ApiError::from)
    }
}
