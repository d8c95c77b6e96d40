// ==========================================
// Reorder Forecast - forecast joiner
// ==========================================
// Left join of inventory groups onto sales groups by
// (category, package_size). Every inventory group yields exactly one
// ForecastRow; unmatched groups get zero sales and zero velocity.
// Flower always shows an ounce row: when flower groups exist but none
// is at 28g, a zero row (flower, unspecified, 28g) is added.
// ==========================================

use crate::config::settings::{ForecastSettings, PriorityBands};
use crate::config::vocabulary::FLOWER;
use crate::domain::forecast::{ForecastRow, InventoryGroup, SalesGroup};
use crate::domain::records::UNSPECIFIED;
use crate::engine::reorder::{days_on_hand, reorder_qty, tag_priority};
use crate::importer::attribute_extractor::OUNCE_TOKEN;
use std::collections::HashMap;
use tracing::{debug, instrument};

pub struct ForecastJoiner {
    doh_threshold: u32,
    bands: PriorityBands,
}

impl ForecastJoiner {
    pub fn new(doh_threshold: u32, bands: PriorityBands) -> Self {
        Self {
            doh_threshold,
            bands,
        }
    }

    pub fn from_settings(settings: &ForecastSettings) -> Self {
        Self::new(settings.doh_threshold, settings.priority_bands)
    }

    fn build_row(
        &self,
        category: &str,
        strain_type: &str,
        package_size: &str,
        on_hand_units: f64,
        units_sold: f64,
        avg_units_per_day: f64,
    ) -> ForecastRow {
        let doh = days_on_hand(on_hand_units, avg_units_per_day);
        ForecastRow {
            category: category.to_string(),
            strain_type: strain_type.to_string(),
            package_size: package_size.to_string(),
            on_hand_units,
            units_sold,
            avg_units_per_day,
            days_on_hand: doh,
            reorder_qty: reorder_qty(doh, self.doh_threshold, avg_units_per_day),
            reorder_priority: tag_priority(doh, avg_units_per_day, &self.bands),
        }
    }

    /// Rows come back sorted by (category, strain_type, package_size)
    #[instrument(skip(self, inventory, sales), fields(inventory = inventory.len(), sales = sales.len()))]
    pub fn join(&self, inventory: &[InventoryGroup], sales: &[SalesGroup]) -> Vec<ForecastRow> {
        let sales_by_key: HashMap<(&str, &str), &SalesGroup> = sales
            .iter()
            .map(|s| ((s.category.as_str(), s.package_size.as_str()), s))
            .collect();

        let mut rows: Vec<ForecastRow> = inventory
            .iter()
            .map(|group| {
                let (units_sold, avg) = sales_by_key
                    .get(&(group.category.as_str(), group.package_size.as_str()))
                    .map(|s| (s.units_sold, s.avg_units_per_day))
                    .unwrap_or((0.0, 0.0));
                self.build_row(
                    &group.category,
                    &group.strain_type,
                    &group.package_size,
                    group.on_hand_units,
                    units_sold,
                    avg,
                )
            })
            .collect();

        let has_flower = rows.iter().any(|r| r.category == FLOWER);
        let has_flower_ounce = rows
            .iter()
            .any(|r| r.category == FLOWER && r.package_size == OUNCE_TOKEN);
        if has_flower && !has_flower_ounce {
            debug!("no flower 28g group, adding placeholder row");
            rows.push(self.build_row(FLOWER, UNSPECIFIED, OUNCE_TOKEN, 0.0, 0.0, 0.0));
        }

        rows.sort_by(|a, b| a.key().cmp(&b.key()));
        rows
    }
}

impl Default for ForecastJoiner {
    fn default() -> Self {
        Self::from_settings(&ForecastSettings::default())
    }
}

/// Free-function form of [`ForecastJoiner::join`]
pub fn join(
    inventory: &[InventoryGroup],
    sales: &[SalesGroup],
    settings: &ForecastSettings,
) -> Vec<ForecastRow> {
    ForecastJoiner::from_settings(settings).join(inventory, sales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ReorderPriority;

    fn inv(category: &str, strain: &str, size: &str, on_hand: f64) -> InventoryGroup {
        InventoryGroup {
            category: category.to_string(),
            strain_type: strain.to_string(),
            package_size: size.to_string(),
            on_hand_units: on_hand,
        }
    }

    fn sold(category: &str, size: &str, units: f64, avg: f64) -> SalesGroup {
        SalesGroup {
            category: category.to_string(),
            package_size: size.to_string(),
            units_sold: units,
            avg_units_per_day: avg,
        }
    }

    #[test]
    fn test_unmatched_inventory_is_kept_with_zero_velocity() {
        let rows = ForecastJoiner::default().join(&[inv("vapes", "hybrid", "1g", 100.0)], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].avg_units_per_day, 0.0);
        assert_eq!(rows[0].days_on_hand, 0);
        assert_eq!(rows[0].reorder_qty, 0);
        assert_eq!(rows[0].reorder_priority, ReorderPriority::Asap);
    }

    #[test]
    fn test_sales_match_on_category_and_size_only() {
        let rows = ForecastJoiner::default().join(
            &[
                inv("vapes", "hybrid", "1g", 10.0),
                inv("vapes", "indica", "1g", 40.0),
            ],
            &[sold("vapes", "1g", 60.0, 1.0), sold("vapes", "0.5g", 5.0, 0.083)],
        );
        assert_eq!(rows.len(), 2);
        // both strains see the same category/size velocity
        assert!(rows.iter().all(|r| r.avg_units_per_day == 1.0));
        assert_eq!(rows[0].days_on_hand, 10);
        assert_eq!(rows[0].reorder_qty, 11);
        assert_eq!(rows[0].reorder_priority, ReorderPriority::Watch);
        assert_eq!(rows[1].days_on_hand, 40);
        assert_eq!(rows[1].reorder_priority, ReorderPriority::Comfortable);
    }

    #[test]
    fn test_end_to_end_numbers() {
        let rows = ForecastJoiner::new(21, PriorityBands::default()).join(
            &[inv("flower", "unspecified", "28g", 50.0)],
            &[sold("flower", "28g", 100.0, 1.667)],
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].days_on_hand, 29);
        assert_eq!(rows[0].reorder_qty, 0);
        assert_eq!(rows[0].reorder_priority, ReorderPriority::Comfortable);
    }

    #[test]
    fn test_flower_ounce_row_is_synthesized() {
        let rows = ForecastJoiner::default().join(&[inv("flower", "hybrid", "3.5g", 20.0)], &[]);
        assert_eq!(rows.len(), 2);
        let ounce = rows
            .iter()
            .find(|r| r.package_size == "28g")
            .expect("ounce row");
        assert_eq!(ounce.category, "flower");
        assert_eq!(ounce.strain_type, "unspecified");
        assert_eq!(ounce.on_hand_units, 0.0);
        assert_eq!(ounce.units_sold, 0.0);
        assert_eq!(ounce.avg_units_per_day, 0.0);
    }

    #[test]
    fn test_flower_ounce_row_not_duplicated() {
        let rows = ForecastJoiner::default().join(
            &[
                inv("flower", "hybrid", "3.5g", 20.0),
                inv("flower", "indica", "28g", 3.0),
            ],
            &[],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.iter().filter(|r| r.package_size == "28g").count(), 1);
    }

    #[test]
    fn test_no_flower_no_synthesis() {
        let rows = ForecastJoiner::default().join(&[inv("edibles", "unspecified", "100mg", 5.0)], &[]);
        assert_eq!(rows.len(), 1);
        assert!(rows.iter().all(|r| r.category != "flower"));
    }

    #[test]
    fn test_rows_sorted_by_key() {
        let rows = ForecastJoiner::default().join(
            &[
                inv("vapes", "hybrid", "1g", 1.0),
                inv("edibles", "unspecified", "10mg", 1.0),
            ],
            &[],
        );
        assert_eq!(rows[0].category, "edibles");
        assert_eq!(rows[1].category, "vapes");
    }
}
