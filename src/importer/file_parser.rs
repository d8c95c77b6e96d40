// ==========================================
// Reorder Forecast - file parsers
// ==========================================
// CSV (.csv) and spreadsheets (.xlsx/.xlsm/.xls/.ods).
// Output is headerless: header detection happens later, because vendor
// exports may carry banner rows above the real header.
// ==========================================

use crate::domain::records::{RawSheet, RawWorkbook};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|c| c.is_empty())
}

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// Parse CSV text from any reader into a single sheet
    pub fn parse_reader<R: Read>(&self, sheet_name: &str, reader: R) -> ImportResult<RawSheet> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // banner rows are shorter than data rows
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // skip fully blank rows
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        Ok(RawSheet::new(sheet_name, rows))
    }
}

impl FileParser for CsvParser {
    fn parse_to_workbook(&self, file_path: &Path) -> ImportResult<RawWorkbook> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let sheet_name = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("csv")
            .to_string();

        let file = File::open(file_path)?;
        let sheet = self.parse_reader(&sheet_name, file)?;
        debug!(file = %file_path.display(), rows = sheet.rows.len(), "parsed CSV");
        Ok(RawWorkbook::single(sheet))
    }
}

// ==========================================
// ExcelParser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_workbook(&self, file_path: &Path) -> ImportResult<RawWorkbook> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let mut sheets = Vec::new();
        for sheet_name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| ImportError::ExcelParseError(format!("{}: {}", sheet_name, e)))?;

            let rows: Vec<Vec<String>> = range
                .rows()
                .map(|cells| {
                    cells
                        .iter()
                        .map(|cell| cell.to_string().trim().to_string())
                        .collect::<Vec<String>>()
                })
                .filter(|row| !is_blank_row(row))
                .collect();

            debug!(sheet = %sheet_name, rows = rows.len(), "parsed worksheet");
            sheets.push(RawSheet::new(sheet_name, rows));
        }

        if sheets.is_empty() {
            return Err(ImportError::ExcelParseError(
                "workbook has no worksheets".to_string(),
            ));
        }

        Ok(RawWorkbook { sheets })
    }
}

// ==========================================
// UniversalFileParser (dispatch on extension)
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_workbook(&self, file_path: &Path) -> ImportResult<RawWorkbook> {
        let ext = extension_of(file_path);
        match ext.as_str() {
            "csv" => CsvParser.parse_to_workbook(file_path),
            e if SPREADSHEET_EXTENSIONS.contains(&e) => ExcelParser.parse_to_workbook(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
