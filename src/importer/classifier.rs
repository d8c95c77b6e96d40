// ==========================================
// Reorder Forecast - record classifier
// ==========================================
// Fills the derived fields of mapped records:
// canonical_category, strain_type (inventory only), package_size.
// The raw category is passed as context so "0.5" under a vape
// category still resolves to a half gram.
// ==========================================

use crate::domain::records::{InventoryRecord, SalesRecord};
use crate::importer::attribute_extractor::PatternAttributeExtractor;
use crate::importer::category_normalizer::CategoryNormalizer;
use crate::importer::importer_trait::AttributeExtractor;
use tracing::debug;

pub struct RecordClassifier {
    normalizer: CategoryNormalizer,
    extractor: Box<dyn AttributeExtractor>,
}

impl RecordClassifier {
    pub fn new(normalizer: CategoryNormalizer) -> Self {
        Self::with_extractor(normalizer, Box::new(PatternAttributeExtractor))
    }

    pub fn with_extractor(normalizer: CategoryNormalizer, extractor: Box<dyn AttributeExtractor>) -> Self {
        Self {
            normalizer,
            extractor,
        }
    }

    pub fn normalizer(&self) -> &CategoryNormalizer {
        &self.normalizer
    }

    pub fn classify_inventory(&self, records: &mut [InventoryRecord]) {
        for record in records.iter_mut() {
            record.canonical_category = self.normalizer.normalize_category(&record.category);
            record.strain_type = self
                .extractor
                .extract_strain_type(&record.item_name, &record.category);
            record.package_size = self
                .extractor
                .extract_size(&record.item_name, Some(record.category.as_str()));
        }
        debug!(count = records.len(), "inventory records classified");
    }

    pub fn classify_sales(&self, records: &mut [SalesRecord]) {
        for record in records.iter_mut() {
            record.canonical_category = self.normalizer.normalize_category(&record.category);
            record.package_size = self
                .extractor
                .extract_size(&record.product_name, Some(record.category.as_str()));
        }
        debug!(count = records.len(), "sales records classified");
    }
}

impl Default for RecordClassifier {
    fn default() -> Self {
        Self::new(CategoryNormalizer::default())
    }
}
