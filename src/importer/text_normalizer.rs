// ==========================================
// Reorder Forecast - text normalizer
// ==========================================
// Two variants:
// - normalize_header: lower-case, drop whitespace / '_' / '-'
//   ("Qty_On-Hand" → "qtyonhand"), used for header matching
// - normalize_text: lower-case, trim, single spaces; used for
//   product names and category strings
// Both are idempotent.
// ==========================================

/// Header-matching normalization
pub fn normalize_header(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Free-text normalization (spaces kept)
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_header_strips_separators() {
        assert_eq!(normalize_header("Qty On Hand"), "qtyonhand");
        assert_eq!(normalize_header("qty_on-hand"), "qtyonhand");
        assert_eq!(normalize_header("  Master\tCategory "), "mastercategory");
        assert_eq!(normalize_header("Qty."), "qty.");
        assert_eq!(normalize_header(""), "");
    }

    #[test]
    fn test_normalize_text_keeps_single_spaces() {
        assert_eq!(normalize_text("  Blue   Dream 3.5G "), "blue dream 3.5g");
        assert_eq!(normalize_text("Pre-Roll"), "pre-roll");
    }

    proptest! {
        #[test]
        fn prop_normalize_header_idempotent(s in "\\PC{0,40}") {
            let once = normalize_header(&s);
            prop_assert_eq!(normalize_header(&once), once);
        }

        #[test]
        fn prop_normalize_text_idempotent(s in "\\PC{0,40}") {
            let once = normalize_text(&s);
            prop_assert_eq!(normalize_text(&once), once);
        }
    }
}
