// ==========================================
// Reorder Forecast - category vocabulary
// ==========================================
// Canonical categories and their keywords, kept as data so that
// extending the vocabulary is a config change.
// List order is match order: first category with a hit wins.
// ==========================================

use serde::{Deserialize, Serialize};

pub const FLOWER: &str = "flower";
pub const PRE_ROLLS: &str = "pre rolls";
pub const VAPES: &str = "vapes";
pub const EDIBLES: &str = "edibles";
pub const BEVERAGES: &str = "beverages";
pub const CONCENTRATES: &str = "concentrates";
pub const TINCTURES: &str = "tinctures";
pub const TOPICALS: &str = "topicals";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

impl CanonicalCategory {
    fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVocabulary {
    pub categories: Vec<CanonicalCategory>,

    /// Sales rows whose category contains one of these are dropped
    #[serde(default = "default_excluded_keywords")]
    pub excluded_sales_keywords: Vec<String>,

    /// Report roll-up labels (exact match) that are not product lines
    #[serde(default = "default_aggregate_labels")]
    pub aggregate_labels: Vec<String>,
}

fn default_excluded_keywords() -> Vec<String> {
    ["accessor", "paraphernalia", "merch", "apparel", "battery", "batteries"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

fn default_aggregate_labels() -> Vec<String> {
    vec!["all".to_string()]
}

impl Default for CategoryVocabulary {
    fn default() -> Self {
        Self {
            // pre rolls and vapes come first: "infused flower pre-roll" and
            // "live resin cart" must not fall into flower / concentrates
            categories: vec![
                CanonicalCategory::new(PRE_ROLLS, &["pre roll", "pre-roll", "preroll", "joint", "blunt"]),
                CanonicalCategory::new(
                    VAPES,
                    &["vape", "cart", "cartridge", "disposable", "pod", "vaporizer"],
                ),
                CanonicalCategory::new(BEVERAGES, &["beverage", "drink", "soda", "seltzer", "tea"]),
                CanonicalCategory::new(
                    EDIBLES,
                    &["edible", "gummy", "gummies", "chocolate", "candy", "chew", "cookie", "mint"],
                ),
                CanonicalCategory::new(
                    CONCENTRATES,
                    &[
                        "concentrate",
                        "extract",
                        "wax",
                        "shatter",
                        "rosin",
                        "resin",
                        "badder",
                        "budder",
                        "diamond",
                        "hash",
                        "kief",
                        "crumble",
                        "sauce",
                        "dab",
                    ],
                ),
                CanonicalCategory::new(TINCTURES, &["tincture", "sublingual", "drops"]),
                CanonicalCategory::new(
                    TOPICALS,
                    &["topical", "lotion", "balm", "salve", "cream", "patch", "transdermal"],
                ),
                CanonicalCategory::new(FLOWER, &["flower", "bud", "smalls", "shake", "popcorn"]),
            ],
            excluded_sales_keywords: default_excluded_keywords(),
            aggregate_labels: default_aggregate_labels(),
        }
    }
}
