// ==========================================
// Reorder Forecast - importer layer
// ==========================================
// Vendor exports → typed, classified records.
// Supports: CSV, Excel (.xlsx/.xlsm/.xls), OpenDocument (.ods)
// ==========================================

pub mod attribute_extractor;
pub mod category_normalizer;
pub mod classifier;
pub mod column_resolver;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod header_locator;
pub mod importer_trait;
pub mod text_normalizer;

pub use attribute_extractor::{extract_size, extract_strain_type, PatternAttributeExtractor};
pub use category_normalizer::CategoryNormalizer;
pub use classifier::RecordClassifier;
pub use column_resolver::{resolve, ColumnResolver};
pub use data_cleaner::{Coerced, DataCleaner};
pub use error::{ImportError, ImportResult, MissingField};
pub use field_mapper::{FieldMapper, MappedTable};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use header_locator::HeaderLocator;
pub use importer_trait::{AttributeExtractor, FileParser};
pub use text_normalizer::{normalize_header, normalize_text};
