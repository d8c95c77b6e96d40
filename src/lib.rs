// ==========================================
// Reorder Forecast - core library
// ==========================================
// POS inventory / sales exports → per (category, strain, size)
// velocity, days on hand, reorder quantity and priority.
// ==========================================

// ==========================================
// Modules
// ==========================================

// Domain - entities and types
pub mod domain;

// Configuration - settings, aliases, vocabulary
pub mod config;

// Importer - uploads to classified records
pub mod importer;

// Engine - aggregation, join, reorder rules
pub mod engine;

// API - entry points for outer collaborators
pub mod api;

// Application - session context
pub mod app;

// Logging
pub mod logging;

// Timing
pub mod perf;

// ==========================================
// Re-exports
// ==========================================

pub use domain::types::{HeaderLocation, MetricFilter, ReorderPriority, TableKind};

pub use domain::{
    CategoryView, ForecastRow, ForecastSummary, InventoryRecord, PurchaseOrder, SalesRecord,
};

pub use config::{ColumnAliasTable, CategoryVocabulary, ConfigManager, ForecastSettings};

pub use api::{ApiError, ForecastApi, ForecastReport, ForecastSource};

pub use app::SessionState;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Reorder Forecast";
