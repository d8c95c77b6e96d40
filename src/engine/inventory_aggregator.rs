// ==========================================
// Reorder Forecast - inventory aggregator
// ==========================================
// Classified inventory records → one group per
// (category, strain_type, package_size), on-hand units summed.
// Output is ordered by the group key.
// ==========================================

use crate::domain::forecast::InventoryGroup;
use crate::domain::records::InventoryRecord;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

type InventoryKey = (String, String, String);

pub struct InventoryAggregator;

impl InventoryAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Group and sum. Quantities were coerced at mapping time, so every
    /// record counts (a non-numeric cell contributes 0, the row stays).
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn aggregate(&self, records: &[InventoryRecord]) -> Vec<InventoryGroup> {
        let mut groups: BTreeMap<InventoryKey, f64> = BTreeMap::new();

        for record in records {
            let key = (
                record.canonical_category.clone(),
                record.strain_type.clone(),
                record.package_size.clone(),
            );
            *groups.entry(key).or_insert(0.0) += record.on_hand_units;
        }

        debug!(groups = groups.len(), "inventory aggregated");

        groups
            .into_iter()
            .map(|((category, strain_type, package_size), on_hand_units)| InventoryGroup {
                category,
                strain_type,
                package_size,
                on_hand_units,
            })
            .collect()
    }
}

impl Default for InventoryAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-function form of [`InventoryAggregator::aggregate`]
pub fn aggregate_inventory(records: &[InventoryRecord]) -> Vec<InventoryGroup> {
    InventoryAggregator::new().aggregate(records)
}
