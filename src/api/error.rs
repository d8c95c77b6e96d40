// ==========================================
// Reorder Forecast - API error type
// ==========================================
// Every failure of a forecast pass flattens to one ApiError whose
// Display is the message shown to the operator.
// ==========================================

use crate::config::error::ConfigError;
use crate::importer::error::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Unreadable upload, missing columns, empty workbook
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),

    #[error("export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::Export(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Export(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
