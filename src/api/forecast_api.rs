// ==========================================
// Reorder Forecast - forecast API
// ==========================================
// The single entry point for outer collaborators (CLI, UI):
// uploads + settings in, ForecastReport out.
// A pass is a pure function of its inputs; nothing is kept between calls.
// ==========================================

use crate::api::dto::{ForecastReport, ForecastSource};
use crate::api::error::ApiResult;
use crate::config::column_aliases::ColumnAliasTable;
use crate::config::config_manager::ConfigManager;
use crate::config::settings::ForecastSettings;
use crate::config::vocabulary::CategoryVocabulary;
use crate::domain::records::RawWorkbook;
use crate::engine::{summarize, ForecastJoiner, InventoryAggregator, SalesAggregator};
use crate::importer::{
    CategoryNormalizer, FieldMapper, FileParser, RecordClassifier, UniversalFileParser,
};
use crate::perf::PerfGuard;
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

pub struct ForecastApi {
    aliases: ColumnAliasTable,
    classifier: RecordClassifier,
    parser: Box<dyn FileParser>,
}

impl ForecastApi {
    pub fn new(aliases: ColumnAliasTable, vocabulary: CategoryVocabulary) -> Self {
        Self {
            aliases,
            classifier: RecordClassifier::new(CategoryNormalizer::new(vocabulary)),
            parser: Box::new(UniversalFileParser),
        }
    }

    /// Aliases and vocabulary from the config directory (defaults when absent)
    pub fn from_config(config: &ConfigManager) -> ApiResult<Self> {
        Ok(Self::new(config.load_aliases()?, config.load_vocabulary()?))
    }

    pub fn with_parser(mut self, parser: Box<dyn FileParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn run(&self, source: &ForecastSource, settings: &ForecastSettings) -> ApiResult<ForecastReport> {
        match source {
            ForecastSource::Files { inventory, sales } => self.run_from_files(inventory, sales, settings),
            ForecastSource::Workbooks { inventory, sales } => {
                self.run_from_workbooks(inventory, sales, settings)
            }
        }
    }

    pub fn run_from_files(
        &self,
        inventory_path: &Path,
        sales_path: &Path,
        settings: &ForecastSettings,
    ) -> ApiResult<ForecastReport> {
        info!(
            inventory = %inventory_path.display(),
            sales = %sales_path.display(),
            "reading uploads"
        );
        let inventory = self.parser.parse_to_workbook(inventory_path)?;
        let sales = self.parser.parse_to_workbook(sales_path)?;
        self.run_from_workbooks(&inventory, &sales, settings)
    }

    /// One full recomputation pass.
    ///
    /// # Steps
    /// 1. validate settings
    /// 2. map both workbooks to records (header location, column resolution)
    /// 3. classify records (category, strain type, package size)
    /// 4. aggregate inventory and sales
    /// 5. join, tag, summarize
    #[instrument(skip_all, fields(run_id))]
    pub fn run_from_workbooks(
        &self,
        inventory: &RawWorkbook,
        sales: &RawWorkbook,
        settings: &ForecastSettings,
    ) -> ApiResult<ForecastReport> {
        let run_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("run_id", run_id.as_str());
        let mut perf = PerfGuard::new("forecast");

        // === Step 1: settings ===
        settings.validate()?;
        info!(
            doh_threshold = settings.doh_threshold,
            sales_period_days = settings.sales_period_days,
            velocity_adjustment = settings.velocity_adjustment,
            "forecast started"
        );

        // === Step 2: field mapping ===
        debug!("step 2: field mapping");
        let mapper = FieldMapper::new(settings.header_scan_rows);
        let mut inventory_table = mapper.map_inventory(inventory, &self.aliases.inventory)?;
        let mut sales_table = mapper.map_sales(sales, &self.aliases.sales)?;
        info!(
            inventory_sheet = %inventory_table.sheet,
            inventory_rows = inventory_table.records.len(),
            sales_sheet = %sales_table.sheet,
            sales_rows = sales_table.records.len(),
            "uploads mapped"
        );

        let coerced_cells = inventory_table.coerced_cells + sales_table.coerced_cells;
        if coerced_cells > 0 {
            warn!(coerced_cells, "non-numeric quantity cells counted as 0");
        }

        // === Step 3: classification ===
        debug!("step 3: classification");
        self.classifier.classify_inventory(&mut inventory_table.records);
        self.classifier.classify_sales(&mut sales_table.records);

        // === Step 4: aggregation ===
        debug!("step 4: aggregation");
        let inventory_groups = InventoryAggregator::new().aggregate(&inventory_table.records);
        let sales_groups = SalesAggregator::new(self.classifier.normalizer()).aggregate(
            &sales_table.records,
            settings.sales_period_days,
            settings.velocity_adjustment,
        );

        // === Step 5: join + summary ===
        debug!("step 5: join");
        let rows = ForecastJoiner::from_settings(settings).join(&inventory_groups, &sales_groups);
        let summary = summarize(&rows, &sales_groups);
        perf.set_rows(rows.len());

        info!(
            rows = rows.len(),
            reorder_asap = summary.reorder_asap,
            watchlist = summary.watchlist,
            "forecast finished"
        );

        Ok(ForecastReport {
            run_id,
            generated_at: Utc::now(),
            settings: settings.clone(),
            inventory_sheet: inventory_table.sheet,
            sales_sheet: sales_table.sheet,
            inventory_header: inventory_table.header,
            sales_header: sales_table.header,
            rows,
            summary,
            coerced_cells,
        })
    }
}

impl Default for ForecastApi {
    fn default() -> Self {
        Self::new(ColumnAliasTable::default(), CategoryVocabulary::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::config::error::ConfigError;
    use crate::domain::records::RawSheet;
    use crate::domain::types::ReorderPriority;

    fn workbook(data: &[&[&str]]) -> RawWorkbook {
        RawWorkbook::single(RawSheet::new(
            "Sheet1",
            data.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        ))
    }

    #[test]
    fn test_run_from_workbooks_end_to_end() {
        let inventory = workbook(&[
            &["Product", "Category", "Available"],
            &["Blue Dream 28g", "flower", "50"],
        ]);
        let sales = workbook(&[
            &["Product", "Category", "Qty Sold"],
            &["Blue Dream 28g", "flower", "100"],
        ]);

        let report = ForecastApi::default()
            .run_from_workbooks(&inventory, &sales, &ForecastSettings::default())
            .unwrap();

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.avg_units_per_day, 1.667);
        assert_eq!(row.days_on_hand, 29);
        assert_eq!(row.reorder_priority, ReorderPriority::Comfortable);
        assert_eq!(row.reorder_qty, 0);
        assert_eq!(report.summary.total_units_sold, 100.0);
        assert!(!report.run_id.is_empty());
    }

    #[test]
    fn test_invalid_settings_rejected_before_mapping() {
        let settings = ForecastSettings {
            sales_period_days: 3,
            ..ForecastSettings::default()
        };
        let err = ForecastApi::default()
            .run_from_workbooks(&workbook(&[]), &workbook(&[]), &settings)
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(ConfigError::OutOfRange { .. })));
    }
}
