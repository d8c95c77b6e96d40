// ==========================================
// Reorder Forecast - importer error types
// ==========================================
// thiserror derive; one variant per failure an operator can act on
// ==========================================

use crate::domain::types::{SemanticField, TableKind};
use std::fmt;
use thiserror::Error;

/// A semantic field that no header matched, with the aliases tried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub field: SemanticField,
    pub tried: Vec<String>,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: tried {}", self.field, self.tried.join(", "))
    }
}

/// Importer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .csv/.xlsx/.xlsm/.xls/.ods)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse spreadsheet: {0}")]
    ExcelParseError(String),

    #[error("failed to parse CSV: {0}")]
    CsvParseError(String),

    #[error("{0} file contains no data")]
    EmptyWorkbook(TableKind),

    // ===== Column mapping errors =====
    #[error(
        "{table} file (sheet '{sheet}') is missing required columns.\n{}\ncolumns found: {}",
        describe_missing(.missing),
        join_headers(.found)
    )]
    MissingColumns {
        table: TableKind,
        sheet: String,
        missing: Vec<MissingField>,
        found: Vec<String>,
    },
}

fn describe_missing(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(|m| format!("- {}", m))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_headers(found: &[String]) -> String {
    found.join(", ")
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_aliases_and_headers() {
        let err = ImportError::MissingColumns {
            table: TableKind::Inventory,
            sheet: "inventory".to_string(),
            missing: vec![MissingField {
                field: SemanticField::OnHandQuantity,
                tried: vec!["available".to_string(), "qoh".to_string()],
            }],
            found: vec!["Product".to_string(), "Category".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.starts_with("inventory file (sheet 'inventory') is missing required columns"));
        assert!(msg.contains("- quantity on hand: tried available, qoh"));
        assert!(msg.contains("columns found: Product, Category"));
    }
}
