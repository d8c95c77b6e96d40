// ==========================================
// Reorder Forecast - engine layer
// ==========================================
// Pure functions of (records, settings): no I/O, no hidden state.
// aggregate → join → tag → summarize
// ==========================================

pub mod forecast_joiner;
pub mod inventory_aggregator;
pub mod reorder;
pub mod sales_aggregator;
pub mod summary;

pub use forecast_joiner::{join, ForecastJoiner};
pub use inventory_aggregator::{aggregate_inventory, InventoryAggregator};
pub use reorder::{days_on_hand, reorder_qty, tag_priority};
pub use sales_aggregator::{aggregate_sales, average_units_per_day, quantize_velocity, SalesAggregator};
pub use summary::{apply_filter, category_views, summarize};
