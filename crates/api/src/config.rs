use std::path::PathBuf;

use siteledger_observability::LogFormat;
use thiserror::Error;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. The config is
/// passed into [`crate::app::build_app`]; nothing reads the environment after
/// startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Directory uploaded files are stored in (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Request body cap for uploads, in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Log output format (default: `json`).
    pub log_format: LogFormat,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{key}={value:?} is invalid: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 10 * 1024 * 1024,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default    |
    /// |--------------------|------------|
    /// | `HOST`             | `0.0.0.0`  |
    /// | `PORT`             | `8080`     |
    /// | `UPLOAD_DIR`       | `uploads`  |
    /// | `MAX_UPLOAD_BYTES` | `10485760` |
    /// | `LOG_FORMAT`       | `json`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|e| invalid("PORT", &v, e))?,
            None => defaults.port,
        };

        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => {
                let bytes: usize = v.trim().parse().map_err(|e| invalid("MAX_UPLOAD_BYTES", &v, e))?;
                if bytes == 0 {
                    return Err(invalid("MAX_UPLOAD_BYTES", &v, "must be greater than zero"));
                }
                bytes
            }
            None => defaults.max_upload_bytes,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse().map_err(|e| invalid("LOG_FORMAT", &v, e))?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            upload_dir,
            max_upload_bytes,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
