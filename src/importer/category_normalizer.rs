// ==========================================
// Reorder Forecast - category normalizer
// ==========================================
// Vendor category text → canonical category token.
// Keyword lists come from CategoryVocabulary; first category with a
// keyword hit wins. Unmatched categories pass through (trimmed and
// lower-cased) so they stay visible in the forecast.
// ==========================================

use crate::config::vocabulary::CategoryVocabulary;
use crate::importer::text_normalizer::normalize_text;

pub struct CategoryNormalizer {
    vocabulary: CategoryVocabulary,
}

impl CategoryNormalizer {
    pub fn new(vocabulary: CategoryVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    pub fn normalize_category(&self, raw: &str) -> String {
        let text = normalize_text(raw);

        self.vocabulary
            .categories
            .iter()
            .find(|category| {
                category
                    .keywords
                    .iter()
                    .any(|keyword| text.contains(&normalize_text(keyword)))
            })
            .map(|category| category.name.clone())
            .unwrap_or(text)
    }

    /// Accessory lines and report roll-ups ("All") are not purchasable
    /// product and must not feed sales velocity
    pub fn is_excluded_from_sales(&self, raw: &str) -> bool {
        let text = normalize_text(raw);

        let is_aggregate = self
            .vocabulary
            .aggregate_labels
            .iter()
            .any(|label| normalize_text(label) == text);
        if is_aggregate {
            return true;
        }

        self.vocabulary
            .excluded_sales_keywords
            .iter()
            .any(|keyword| text.contains(&normalize_text(keyword)))
    }
}

impl Default for CategoryNormalizer {
    fn default() -> Self {
        Self::new(CategoryVocabulary::default())
    }
}
