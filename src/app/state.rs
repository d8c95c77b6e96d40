// ==========================================
// Reorder Forecast - session state
// ==========================================
// Per-session context held by the caller (CLI run, UI session):
// current settings, selected metric tile, last good report.
// The core stays stateless; this object is the only mutable piece.
// ==========================================

use crate::api::{ApiResult, ForecastApi, ForecastReport, ForecastSource};
use crate::config::settings::ForecastSettings;
use crate::domain::forecast::{CategoryView, ForecastRow};
use crate::domain::types::MetricFilter;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub settings: ForecastSettings,
    pub metric_filter: MetricFilter,
    pub last_report: Option<ForecastReport>,
    /// Message of the most recent failed pass; cleared by a successful one
    pub last_error: Option<String>,
}

impl SessionState {
    pub fn new(settings: ForecastSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Run a full pass with the current settings.
    ///
    /// On failure the message is kept in `last_error` and the previous
    /// report stays in place.
    pub fn recompute(&mut self, api: &ForecastApi, source: &ForecastSource) -> ApiResult<&ForecastReport> {
        match api.run(source, &self.settings) {
            Ok(report) => {
                self.last_error = None;
                Ok(&*self.last_report.insert(report))
            }
            Err(err) => {
                warn!(error = %err, kept_previous = self.last_report.is_some(), "forecast failed");
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn set_metric_filter(&mut self, filter: MetricFilter) {
        self.metric_filter = filter;
    }

    /// Rows of the last report under the selected metric filter
    pub fn visible_rows(&self) -> Vec<ForecastRow> {
        self.last_report
            .as_ref()
            .map(|r| r.filtered_rows(self.metric_filter))
            .unwrap_or_default()
    }

    pub fn visible_views(&self) -> Vec<CategoryView> {
        self.last_report
            .as_ref()
            .map(|r| r.category_views(self.metric_filter))
            .unwrap_or_default()
    }
}
