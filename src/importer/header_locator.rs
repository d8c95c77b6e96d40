// ==========================================
// Reorder Forecast - header locator
// ==========================================
// POS exports often open with banner rows ("Export Date", store name,
// date range). The header is the first scanned row whose normalized
// cells hit every required keyword group.
// No qualifying row → NotFound, callers use row 0 and let column
// resolution surface the real error.
// ==========================================

use crate::domain::types::HeaderLocation;
use crate::importer::text_normalizer::normalize_header;
use std::collections::HashSet;

pub struct HeaderLocator;

impl HeaderLocator {
    /// Scan up to `max_scan_rows` rows for the header.
    ///
    /// # Rules
    /// - each cell is normalized like a header name
    /// - a row qualifies when its token set intersects every set in `required_token_sets`
    /// - first qualifying row wins
    /// - empty `required_token_sets` → row 0 qualifies trivially
    pub fn locate<R: AsRef<[String]>>(
        raw_rows: &[R],
        required_token_sets: &[HashSet<String>],
        max_scan_rows: usize,
    ) -> HeaderLocation {
        let scanned = raw_rows.len().min(max_scan_rows);

        for (idx, row) in raw_rows.iter().take(scanned).enumerate() {
            let tokens: Vec<String> = row
                .as_ref()
                .iter()
                .map(|cell| normalize_header(cell))
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.is_empty() {
                continue;
            }

            let qualifies = required_token_sets
                .iter()
                .all(|group| tokens.iter().any(|t| group.contains(t)));
            if !qualifies {
                continue;
            }

            let recognised = tokens
                .iter()
                .filter(|t| required_token_sets.iter().any(|group| group.contains(*t)))
                .count();
            let confidence = if required_token_sets.is_empty() {
                1.0
            } else {
                recognised as f64 / tokens.len() as f64
            };

            return HeaderLocation::Located {
                row: idx,
                confidence,
            };
        }

        HeaderLocation::NotFound {
            scanned_rows: scanned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn group(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| normalize_header(w)).collect()
    }

    #[test]
    fn test_header_after_three_banner_rows() {
        let table = rows(&[
            &["Product Sales Report", "", ""],
            &["Export Date: 2025-01-31", "", ""],
            &["Store: Main St", "", ""],
            &["Product", "Category", "Qty Sold"],
            &["Blue Dream 3.5g", "Flower", "4"],
        ]);
        let required = vec![group(&["product"]), group(&["category"])];

        let outcome = HeaderLocator::locate(&table, &required, 10);
        assert_eq!(outcome.row(), 3);
        match outcome {
            HeaderLocation::Located { confidence, .. } => {
                assert!((confidence - 2.0 / 3.0).abs() < 1e-9)
            }
            other => panic!("expected Located, got {:?}", other),
        }
    }

    #[test]
    fn test_row_must_hit_every_group() {
        let table = rows(&[
            &["Category", "Notes"],
            &["Master Category", "Units Sold"],
        ]);
        let required = vec![
            group(&["units sold", "qty"]),
            group(&["category", "master category"]),
        ];

        assert_eq!(HeaderLocator::locate(&table, &required, 10).row(), 1);
    }

    #[test]
    fn test_earlier_qualifying_row_wins() {
        let table = rows(&[
            &["Sales by Product", ""],
            &["Product", "Category"],
            &["Product", "Category", "Qty Sold"],
            &["Blue Dream 3.5g", "Flower", "4"],
        ]);
        let required = vec![group(&["product"]), group(&["category"])];

        let outcome = HeaderLocator::locate(&table, &required, 10);
        assert_eq!(
            outcome,
            HeaderLocation::Located {
                row: 1,
                confidence: 1.0
            }
        );
    }

    #[test]
    fn test_not_found_falls_back_to_row_zero() {
        let table = rows(&[&["a", "b"], &["c", "d"]]);
        let required = vec![group(&["category"])];

        let outcome = HeaderLocator::locate(&table, &required, 10);
        assert_eq!(outcome, HeaderLocation::NotFound { scanned_rows: 2 });
        assert_eq!(outcome.row(), 0);
    }

    #[test]
    fn test_scan_limit_respected() {
        let table = rows(&[&["x"], &["y"], &["Category"]]);
        let required = vec![group(&["category"])];

        let outcome = HeaderLocator::locate(&table, &required, 2);
        assert_eq!(outcome, HeaderLocation::NotFound { scanned_rows: 2 });
    }

    #[test]
    fn test_cells_are_normalized_before_matching() {
        let table = rows(&[&[" QTY_SOLD ", "master-category"]]);
        let required = vec![group(&["qty sold"]), group(&["master category"])];

        let outcome = HeaderLocator::locate(&table, &required, 10);
        assert_eq!(
            outcome,
            HeaderLocation::Located {
                row: 0,
                confidence: 1.0
            }
        );
    }
}
