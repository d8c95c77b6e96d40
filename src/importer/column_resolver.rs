// ==========================================
// Reorder Forecast - column resolver
// ==========================================
// Picks the actual header for a semantic field from an ordered alias
// list. Alias order is priority: the first alias that has a matching
// header wins, regardless of column position in the table.
// ==========================================

use crate::config::column_aliases::ColumnAlias;
use crate::importer::error::MissingField;
use crate::importer::text_normalizer::normalize_header;
use std::collections::HashMap;

pub struct ColumnResolver {
    /// normalized header → original header (first column wins on collision)
    by_normalized: HashMap<String, String>,
}

impl ColumnResolver {
    pub fn new<S: AsRef<str>>(actual_headers: &[S]) -> Self {
        let mut by_normalized = HashMap::new();
        for header in actual_headers {
            let original = header.as_ref();
            by_normalized
                .entry(normalize_header(original))
                .or_insert_with(|| original.to_string());
        }
        Self { by_normalized }
    }

    /// First alias (in list order) present among the headers
    pub fn resolve<S: AsRef<str>>(&self, candidate_aliases: &[S]) -> Option<&str> {
        candidate_aliases
            .iter()
            .find_map(|alias| self.by_normalized.get(&normalize_header(alias.as_ref())))
            .map(String::as_str)
    }

    /// Resolve a configured alias list, reporting what was tried on failure
    pub fn resolve_field(&self, alias: &ColumnAlias) -> Result<String, MissingField> {
        self.resolve(alias.aliases.as_slice())
            .map(str::to_string)
            .ok_or_else(|| MissingField {
                field: alias.field,
                tried: alias.aliases.clone(),
            })
    }
}

/// One-shot form of [`ColumnResolver::resolve`]
pub fn resolve<A: AsRef<str>, H: AsRef<str>>(
    candidate_aliases: &[A],
    actual_headers: &[H],
) -> Option<String> {
    ColumnResolver::new(actual_headers)
        .resolve(candidate_aliases)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SemanticField;

    #[test]
    fn test_resolve_ignores_case_and_separators() {
        let headers = ["Units", "Category"];
        assert_eq!(resolve(&["qty sold", "units"], &headers), Some("Units".to_string()));
        assert_eq!(
            resolve(&["on_hand"], &["Item", "On Hand", "Dept"]),
            Some("On Hand".to_string())
        );
    }

    #[test]
    fn test_alias_priority_beats_column_order() {
        // "qty" comes first in the table but "quantity sold" is the preferred alias
        let headers = ["Qty", "Quantity Sold", "Category"];
        assert_eq!(
            resolve(&["quantity sold", "qty"], &headers),
            Some("Quantity Sold".to_string())
        );
        assert_eq!(resolve(&["qty", "quantity sold"], &headers), Some("Qty".to_string()));
    }

    #[test]
    fn test_no_match_is_none() {
        let headers = ["Product", "Category"];
        assert_eq!(resolve(&["qty sold", "units"], &headers), None);
        let empty: [&str; 0] = [];
        assert_eq!(resolve(&["units"], &empty), None);
    }

    #[test]
    fn test_first_column_wins_on_normalized_collision() {
        let resolver = ColumnResolver::new(&["On Hand", "on_hand"]);
        assert_eq!(resolver.resolve(&["onhand"]), Some("On Hand"));
    }

    #[test]
    fn test_resolve_field_reports_tried_aliases() {
        let alias = ColumnAlias::new(SemanticField::QuantitySold, &["qty sold", "units"]);
        let resolver = ColumnResolver::new(&["Product", "Category"]);
        let missing = resolver.resolve_field(&alias).unwrap_err();
        assert_eq!(missing.field, SemanticField::QuantitySold);
        assert_eq!(missing.tried, vec!["qty sold", "units"]);
    }
}
