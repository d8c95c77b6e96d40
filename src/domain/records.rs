// ==========================================
// Reorder Forecast - raw tables and row records
// ==========================================
// RawWorkbook / RawSheet: headerless grids as read from an upload
// HeaderedTable: a sheet after its header row has been promoted
// InventoryRecord / SalesRecord: rows in the internal schema
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Untyped row: column name → cell text
pub type RawRow = HashMap<String, String>;

/// Token used when an attribute cannot be derived
pub const UNSPECIFIED: &str = "unspecified";

// ==========================================
// RawSheet / RawWorkbook
// ==========================================

/// One sheet of cells, no header interpretation applied yet.
/// Banner rows (export date, store name, ...) are kept as ordinary rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Promote `header_row` to the header and turn every later row into a `RawRow`.
    ///
    /// - header cells are trimmed; blank header cells drop their column
    /// - a repeated header name keeps the first column
    /// - rows whose cells are all blank are skipped
    pub fn promote_header(&self, header_row: usize) -> HeaderedTable {
        let header_cells: &[String] = self
            .rows
            .get(header_row)
            .map(|r| r.as_slice())
            .unwrap_or(&[]);

        let mut headers: Vec<String> = Vec::new();
        let mut columns: Vec<(usize, String)> = Vec::new();
        for (col_idx, cell) in header_cells.iter().enumerate() {
            let name = cell.trim();
            if name.is_empty() || headers.iter().any(|h| h == name) {
                continue;
            }
            headers.push(name.to_string());
            columns.push((col_idx, name.to_string()));
        }

        let rows = self
            .rows
            .iter()
            .skip(header_row + 1)
            .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
            .map(|r| {
                columns
                    .iter()
                    .map(|(idx, name)| {
                        let value = r.get(*idx).map(|c| c.trim()).unwrap_or("");
                        (name.clone(), value.to_string())
                    })
                    .collect::<RawRow>()
            })
            .collect();

        HeaderedTable {
            sheet: self.name.clone(),
            headers,
            rows,
        }
    }
}

/// All sheets of one uploaded file, in workbook order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawWorkbook {
    pub sheets: Vec<RawSheet>,
}

impl RawWorkbook {
    pub fn single(sheet: RawSheet) -> Self {
        Self {
            sheets: vec![sheet],
        }
    }
}

// ==========================================
// HeaderedTable
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderedTable {
    pub sheet: String,
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// InventoryRecord
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_name: String,
    /// Category as exported by the vendor, pre-normalization
    pub category: String,
    pub on_hand_units: f64,

    // Derived by the attribute extractors / category normalizer
    pub canonical_category: String,
    pub strain_type: String,
    pub package_size: String,
}

impl InventoryRecord {
    pub fn new(item_name: impl Into<String>, category: impl Into<String>, on_hand_units: f64) -> Self {
        Self {
            item_name: item_name.into(),
            category: category.into(),
            on_hand_units,
            canonical_category: String::new(),
            strain_type: UNSPECIFIED.to_string(),
            package_size: UNSPECIFIED.to_string(),
        }
    }
}

// ==========================================
// SalesRecord
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product_name: String,
    pub category: String,
    pub units_sold: f64,

    // Derived
    pub canonical_category: String,
    pub package_size: String,
}

impl SalesRecord {
    pub fn new(product_name: impl Into<String>, category: impl Into<String>, units_sold: f64) -> Self {
        Self {
            product_name: product_name.into(),
            category: category.into(),
            units_sold,
            canonical_category: String::new(),
            package_size: UNSPECIFIED.to_string(),
        }
    }
}
