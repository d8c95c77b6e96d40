// ==========================================
// Reorder Forecast - domain layer
// ==========================================
// Plain data: raw tables, records, aggregate groups, forecast rows.
// No parsing, no business rules.
// ==========================================

pub mod forecast;
pub mod purchase_order;
pub mod records;
pub mod types;

pub use forecast::{CategoryView, ForecastRow, ForecastSummary, InventoryGroup, SalesGroup};
pub use purchase_order::{PoLine, PurchaseOrder};
pub use records::{
    HeaderedTable, InventoryRecord, RawRow, RawSheet, RawWorkbook, SalesRecord, UNSPECIFIED,
};
pub use types::{HeaderLocation, MetricFilter, ReorderPriority, SemanticField, TableKind};
