// ==========================================
// Reorder Forecast - API layer
// ==========================================
// Entry points for outer collaborators: run a forecast, export it
// ==========================================

pub mod dto;
pub mod error;
pub mod export;
pub mod forecast_api;

pub use dto::{ForecastReport, ForecastSource};
pub use error::{ApiError, ApiResult};
pub use export::{export_forecast_csv, export_forecast_csv_file};
pub use forecast_api::ForecastApi;
