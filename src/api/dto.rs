// ==========================================
// Reorder Forecast - API data transfer objects
// ==========================================

use crate::config::settings::ForecastSettings;
use crate::domain::forecast::{CategoryView, ForecastRow, ForecastSummary};
use crate::domain::records::RawWorkbook;
use crate::domain::types::{HeaderLocation, MetricFilter};
use crate::engine::summary::{apply_filter, category_views};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the two uploads of a pass come from
#[derive(Debug, Clone)]
pub enum ForecastSource {
    Files { inventory: PathBuf, sales: PathBuf },
    Workbooks { inventory: RawWorkbook, sales: RawWorkbook },
}

/// Result of one forecast pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub settings: ForecastSettings,

    /// Sheets actually used, and how their headers were found
    pub inventory_sheet: String,
    pub sales_sheet: String,
    pub inventory_header: HeaderLocation,
    pub sales_header: HeaderLocation,

    /// Sorted by (category, strain_type, package_size)
    pub rows: Vec<ForecastRow>,
    pub summary: ForecastSummary,

    /// Quantity cells counted as 0 across both uploads
    pub coerced_cells: usize,
}

impl ForecastReport {
    pub fn filtered_rows(&self, filter: MetricFilter) -> Vec<ForecastRow> {
        apply_filter(&self.rows, filter)
    }

    pub fn category_views(&self, filter: MetricFilter) -> Vec<CategoryView> {
        category_views(&self.filtered_rows(filter))
    }
}
