// ==========================================
// Reorder Forecast - aggregate and forecast entities
// ==========================================
// InventoryGroup: (category, strain_type, package_size) → on hand
// SalesGroup:     (category, package_size) → sold, velocity
// ForecastRow:    joined result, one row per inventory group
// ==========================================

use crate::domain::types::ReorderPriority;
use serde::{Deserialize, Serialize};

// ==========================================
// InventoryGroup
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryGroup {
    pub category: String,
    pub strain_type: String,
    pub package_size: String,
    pub on_hand_units: f64,
}

// ==========================================
// SalesGroup
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesGroup {
    pub category: String,
    pub package_size: String,
    pub units_sold: f64,
    pub avg_units_per_day: f64,
}

// ==========================================
// ForecastRow
// ==========================================
// Field order is the CSV export column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub category: String,
    pub strain_type: String,
    pub package_size: String,
    pub on_hand_units: f64,
    pub units_sold: f64,
    pub avg_units_per_day: f64,
    pub days_on_hand: u64,
    pub reorder_qty: u64,
    pub reorder_priority: ReorderPriority,
}

impl ForecastRow {
    /// Group key used for uniqueness and ordering
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.category, &self.strain_type, &self.package_size)
    }
}

// ==========================================
// ForecastSummary (dashboard metric tiles)
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub total_units_sold: f64,
    pub active_categories: usize,
    pub reorder_asap: usize,
    pub watchlist: usize,
}

// ==========================================
// CategoryView
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub category: String,
    /// floor(mean(days_on_hand)) over the rows in view
    pub avg_days_on_hand: u64,
    pub rows: Vec<ForecastRow>,
}
