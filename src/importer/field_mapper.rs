// ==========================================
// Reorder Forecast - field mapper
// ==========================================
// RawWorkbook → typed records:
// 1. pick the sheet and header row (HeaderLocator)
// 2. resolve every semantic field to an actual column (ColumnResolver)
// 3. copy cells into InventoryRecord / SalesRecord, coercing quantities
// ==========================================

use crate::config::column_aliases::{ColumnAlias, InventoryAliases, SalesAliases};
use crate::domain::records::{HeaderedTable, InventoryRecord, RawRow, RawSheet, RawWorkbook, SalesRecord};
use crate::domain::types::{HeaderLocation, TableKind};
use crate::importer::column_resolver::ColumnResolver;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header_locator::HeaderLocator;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Records mapped out of one upload, plus how they were found
#[derive(Debug, Clone)]
pub struct MappedTable<T> {
    pub sheet: String,
    pub header: HeaderLocation,
    pub records: Vec<T>,
    /// Quantity cells that were blank or unparsable and counted as 0
    pub coerced_cells: usize,
}

pub struct FieldMapper {
    cleaner: DataCleaner,
    header_scan_rows: usize,
}

impl FieldMapper {
    pub fn new(header_scan_rows: usize) -> Self {
        Self {
            cleaner: DataCleaner,
            header_scan_rows,
        }
    }

    // ==========================================
    // Sheet / header selection
    // ==========================================

    /// First sheet (workbook order) with a located header wins.
    /// Otherwise the first non-empty sheet is used with row 0 as header.
    pub fn select_sheet<'a>(
        &self,
        workbook: &'a RawWorkbook,
        table: TableKind,
        required_token_sets: &[HashSet<String>],
    ) -> ImportResult<(&'a RawSheet, HeaderLocation)> {
        let mut fallback: Option<(&RawSheet, HeaderLocation)> = None;

        for sheet in workbook.sheets.iter().filter(|s| !s.is_empty()) {
            let location =
                HeaderLocator::locate(&sheet.rows, required_token_sets, self.header_scan_rows);
            if location.is_located() {
                debug!(table = %table, sheet = %sheet.name, header = %location, "header located");
                return Ok((sheet, location));
            }
            if fallback.is_none() {
                fallback = Some((sheet, location));
            }
        }

        match fallback {
            Some((sheet, location)) => {
                warn!(
                    table = %table,
                    sheet = %sheet.name,
                    header = %location,
                    "no header row recognised, using row 0"
                );
                Ok((sheet, location))
            }
            None => Err(ImportError::EmptyWorkbook(table)),
        }
    }

    /// Resolve all fields at once so that the error lists every missing column
    fn resolve_columns(
        &self,
        table: TableKind,
        headered: &HeaderedTable,
        fields: &[&ColumnAlias],
    ) -> ImportResult<Vec<String>> {
        let resolver = ColumnResolver::new(&headered.headers);

        let mut columns = Vec::with_capacity(fields.len());
        let mut missing = Vec::new();
        for alias in fields {
            match resolver.resolve_field(alias) {
                Ok(column) => {
                    debug!(table = %table, field = %alias.field, column = %column, "column resolved");
                    columns.push(column);
                }
                Err(field) => missing.push(field),
            }
        }

        if !missing.is_empty() {
            return Err(ImportError::MissingColumns {
                table,
                sheet: headered.sheet.clone(),
                missing,
                found: headered.headers.clone(),
            });
        }
        Ok(columns)
    }

    fn text(&self, row: &RawRow, column: &str) -> String {
        row.get(column)
            .map(|v| self.cleaner.clean_text(v))
            .unwrap_or_default()
    }

    // ==========================================
    // Inventory
    // ==========================================
    pub fn map_inventory(
        &self,
        workbook: &RawWorkbook,
        aliases: &InventoryAliases,
    ) -> ImportResult<MappedTable<InventoryRecord>> {
        let (sheet, header) =
            self.select_sheet(workbook, TableKind::Inventory, &aliases.header_keywords())?;
        let headered = sheet.promote_header(header.row());

        let columns = self.resolve_columns(
            TableKind::Inventory,
            &headered,
            &[&aliases.name, &aliases.category, &aliases.on_hand],
        )?;
        let (name_col, category_col, on_hand_col) = (&columns[0], &columns[1], &columns[2]);

        let mut coerced_cells = 0;
        let records = headered
            .rows
            .iter()
            .map(|row| {
                let on_hand = self
                    .cleaner
                    .coerce_quantity(row.get(on_hand_col).map(String::as_str));
                if on_hand.coerced {
                    coerced_cells += 1;
                }
                InventoryRecord::new(
                    self.text(row, name_col),
                    self.text(row, category_col),
                    on_hand.value,
                )
            })
            .collect::<Vec<_>>();

        Ok(MappedTable {
            sheet: headered.sheet,
            header,
            records,
            coerced_cells,
        })
    }

    // ==========================================
    // Sales
    // ==========================================
    pub fn map_sales(
        &self,
        workbook: &RawWorkbook,
        aliases: &SalesAliases,
    ) -> ImportResult<MappedTable<SalesRecord>> {
        let (sheet, header) =
            self.select_sheet(workbook, TableKind::Sales, &aliases.header_keywords())?;
        let headered = sheet.promote_header(header.row());

        let columns = self.resolve_columns(
            TableKind::Sales,
            &headered,
            &[&aliases.name, &aliases.category, &aliases.quantity],
        )?;
        let (name_col, category_col, quantity_col) = (&columns[0], &columns[1], &columns[2]);

        let mut coerced_cells = 0;
        let records = headered
            .rows
            .iter()
            .map(|row| {
                let sold = self
                    .cleaner
                    .coerce_quantity(row.get(quantity_col).map(String::as_str));
                if sold.coerced {
                    coerced_cells += 1;
                }
                SalesRecord::new(
                    self.text(row, name_col),
                    self.text(row, category_col),
                    sold.value,
                )
            })
            .collect::<Vec<_>>();

        Ok(MappedTable {
            sheet: headered.sheet,
            header,
            records,
            coerced_cells,
        })
    }
}
