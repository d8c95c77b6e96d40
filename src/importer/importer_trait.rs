// ==========================================
// Reorder Forecast - importer traits
// ==========================================
// Seams of the import pipeline (no implementations here):
// file → RawWorkbook → records → derived attributes
// ==========================================

use crate::domain::records::RawWorkbook;
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// FileParser
// ==========================================
// Implementors: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// Parse a file into headerless sheets.
    ///
    /// # Returns
    /// - Ok(RawWorkbook): every sheet, cells trimmed, blank rows dropped
    /// - Err: missing file, wrong extension, unreadable content
    fn parse_to_workbook(&self, file_path: &Path) -> ImportResult<RawWorkbook>;
}

// ==========================================
// AttributeExtractor
// ==========================================
// Implementors: PatternAttributeExtractor
pub trait AttributeExtractor: Send + Sync {
    /// Strain type from a product name.
    ///
    /// # Rules
    /// 1. base: first of indica / sativa / hybrid / cbd found, else "unspecified"
    /// 2. qualifier: "disposable" (disposable + vape context) or
    ///    "infused" (infused + pre-roll context), disposable checked first
    /// 3. "{base} {qualifier}", or the qualifier alone when base is unspecified
    fn extract_strain_type(&self, name: &str, category: &str) -> String;

    /// Package size token from free text.
    ///
    /// # Rules (first hit wins)
    /// 1. milligrams: "10 mg" → "10mg"
    /// 2. grams / ounces: "3.5g", "1oz" → "28g"
    /// 3. vape context + bare "0.5" / ".5" → "0.5g"
    /// 4. "unspecified"
    fn extract_size(&self, text: &str, context: Option<&str>) -> String;
}
