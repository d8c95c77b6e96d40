// ==========================================
// Reorder Forecast - configuration layer
// ==========================================
// Settings, column alias table, category vocabulary.
// Storage: optional JSON files, built-in defaults otherwise.
// ==========================================

pub mod column_aliases;
pub mod config_manager;
pub mod error;
pub mod settings;
pub mod vocabulary;

pub use column_aliases::{ColumnAlias, ColumnAliasTable, InventoryAliases, SalesAliases};
pub use config_manager::{config_files, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use settings::{ForecastSettings, PriorityBands};
pub use vocabulary::{CanonicalCategory, CategoryVocabulary};
