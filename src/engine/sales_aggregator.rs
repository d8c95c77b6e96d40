// ==========================================
// Reorder Forecast - sales aggregator
// ==========================================
// Classified sales records → one group per (category, package_size)
// with units sold and average units per day.
// Accessory lines and "All" roll-ups are dropped before grouping.
// ==========================================

use crate::domain::forecast::SalesGroup;
use crate::domain::records::SalesRecord;
use crate::importer::category_normalizer::CategoryNormalizer;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Velocity is kept to this many decimal places
pub const VELOCITY_DECIMALS: i32 = 3;

/// Round a velocity to [`VELOCITY_DECIMALS`] places
pub fn quantize_velocity(value: f64) -> f64 {
    let scale = 10f64.powi(VELOCITY_DECIMALS);
    (value * scale).round() / scale
}

/// `units_sold / sales_period_days * velocity_adjustment`, quantized
pub fn average_units_per_day(units_sold: f64, sales_period_days: u32, velocity_adjustment: f64) -> f64 {
    if sales_period_days == 0 {
        return 0.0;
    }
    let avg = units_sold / f64::from(sales_period_days) * velocity_adjustment;
    if avg.is_finite() && avg > 0.0 {
        quantize_velocity(avg)
    } else {
        0.0
    }
}

pub struct SalesAggregator<'a> {
    normalizer: &'a CategoryNormalizer,
}

impl<'a> SalesAggregator<'a> {
    pub fn new(normalizer: &'a CategoryNormalizer) -> Self {
        Self { normalizer }
    }

    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn aggregate(
        &self,
        records: &[SalesRecord],
        sales_period_days: u32,
        velocity_adjustment: f64,
    ) -> Vec<SalesGroup> {
        let mut groups: BTreeMap<(String, String), f64> = BTreeMap::new();
        let mut excluded = 0usize;

        for record in records {
            if self.normalizer.is_excluded_from_sales(&record.category) {
                excluded += 1;
                continue;
            }
            let key = (record.canonical_category.clone(), record.package_size.clone());
            *groups.entry(key).or_insert(0.0) += record.units_sold;
        }

        debug!(groups = groups.len(), excluded, "sales aggregated");

        groups
            .into_iter()
            .map(|((category, package_size), units_sold)| SalesGroup {
                category,
                package_size,
                units_sold,
                avg_units_per_day: average_units_per_day(
                    units_sold,
                    sales_period_days,
                    velocity_adjustment,
                ),
            })
            .collect()
    }
}

/// Free-function form of [`SalesAggregator::aggregate`]
pub fn aggregate_sales(
    records: &[SalesRecord],
    normalizer: &CategoryNormalizer,
    sales_period_days: u32,
    velocity_adjustment: f64,
) -> Vec<SalesGroup> {
    SalesAggregator::new(normalizer).aggregate(records, sales_period_days, velocity_adjustment)
}
