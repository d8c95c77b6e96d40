// ==========================================
// Reorder Forecast - column alias table
// ==========================================
// Accepted header spellings per semantic field, for each upload kind.
// Order inside a list is matching priority.
// Matching ignores case, spaces, underscores and hyphens, so
// "on hand", "onhand" and "On_Hand" are one entry.
// ==========================================

use crate::domain::types::SemanticField;
use crate::importer::text_normalizer::normalize_header;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// ColumnAlias
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAlias {
    pub field: SemanticField,
    pub aliases: Vec<String>,
}

impl ColumnAlias {
    pub fn new(field: SemanticField, aliases: &[&str]) -> Self {
        Self {
            field,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Normalized keyword set, as used by the header locator
    pub fn keyword_set(&self) -> HashSet<String> {
        self.aliases.iter().map(|a| normalize_header(a)).collect()
    }
}

// ==========================================
// Per-upload alias groups
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAliases {
    pub name: ColumnAlias,
    pub on_hand: ColumnAlias,
    pub category: ColumnAlias,
}

impl InventoryAliases {
    /// Keyword groups a row must hit to count as the inventory header
    pub fn header_keywords(&self) -> Vec<HashSet<String>> {
        vec![self.on_hand.keyword_set(), self.category.keyword_set()]
    }
}

impl Default for InventoryAliases {
    fn default() -> Self {
        Self {
            name: ColumnAlias::new(
                SemanticField::ProductName,
                &[
                    "product",
                    "product name",
                    "item",
                    "item name",
                    "sku",
                    "sku name",
                    "sku description",
                    "product description",
                    "description",
                    "strain",
                    "product title",
                    "item description",
                ],
            ),
            on_hand: ColumnAlias::new(
                SemanticField::OnHandQuantity,
                &[
                    "available",
                    "available qty",
                    "available quantity",
                    "on hand",
                    "on hand qty",
                    "on hand units",
                    "ending inventory",
                    "ending qty",
                    "current inventory",
                    "current quantity",
                    "current qty",
                    "inventory on hand",
                    "stock on hand",
                    "qoh",
                    "qty on hand",
                    "quantity on hand",
                    "quantity",
                    "qty",
                    "qty.",
                ],
            ),
            category: ColumnAlias::new(
                SemanticField::Category,
                &[
                    "category",
                    "subcategory",
                    "master category",
                    "product category",
                    "product type",
                    "item category",
                    "department",
                    "dept",
                    "prod category",
                    "product group",
                    "menu category",
                ],
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesAliases {
    pub name: ColumnAlias,
    pub quantity: ColumnAlias,
    pub category: ColumnAlias,
}

impl SalesAliases {
    /// Keyword groups a row must hit to count as the sales header
    pub fn header_keywords(&self) -> Vec<HashSet<String>> {
        vec![self.quantity.keyword_set(), self.category.keyword_set()]
    }
}

impl Default for SalesAliases {
    fn default() -> Self {
        Self {
            name: ColumnAlias::new(
                SemanticField::ProductName,
                &[
                    "product",
                    "product name",
                    "item",
                    "item name",
                    "sku",
                    "sku name",
                    "description",
                    "product description",
                    "item description",
                    "strain",
                ],
            ),
            quantity: ColumnAlias::new(
                SemanticField::QuantitySold,
                &[
                    "quantity sold",
                    "qty sold",
                    "qty",
                    "qty.",
                    "sold",
                    "units",
                    "units sold",
                    "sales units",
                    "total units",
                    "total quantity",
                    "total quantity sold",
                    "sum quantity",
                    "sum of quantity",
                    "sold units",
                    "units sold (qty)",
                ],
            ),
            category: ColumnAlias::new(
                SemanticField::Category,
                &[
                    "master category",
                    "category",
                    "product category",
                    "product type",
                    "item category",
                    "subcategory",
                    "department",
                    "dept",
                    "prod category",
                    "product group",
                ],
            ),
        }
    }
}

// ==========================================
// ColumnAliasTable
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAliasTable {
    #[serde(default)]
    pub inventory: InventoryAliases,
    #[serde(default)]
    pub sales: SalesAliases,
}
