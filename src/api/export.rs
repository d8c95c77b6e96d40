// ==========================================
// Reorder Forecast - CSV export
// ==========================================
// Header line first, even for an empty table, then one line per
// ForecastRow in field order.
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::forecast::ForecastRow;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column names of the exported table, in ForecastRow field order
pub const EXPORT_COLUMNS: [&str; 9] = [
    "category",
    "strain_type",
    "package_size",
    "on_hand_units",
    "units_sold",
    "avg_units_per_day",
    "days_on_hand",
    "reorder_qty",
    "reorder_priority",
];

pub fn export_forecast_csv<W: Write>(rows: &[ForecastRow], writer: W) -> ApiResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(EXPORT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_forecast_csv_file(rows: &[ForecastRow], path: &Path) -> ApiResult<()> {
    let file = File::create(path)?;
    export_forecast_csv(rows, file)?;
    info!(path = %path.display(), rows = rows.len(), "forecast exported");
    Ok(())
}
