// ==========================================
// Reorder Forecast - domain type definitions
// ==========================================
// Priority tags, table kinds, header-location outcomes
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Reorder priority
// ==========================================
// Ordering follows display urgency: ASAP first, DEAD last
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReorderPriority {
    Asap,        // days on hand within the ASAP band
    Watch,       // days on hand within the watch band
    Comfortable, // enough cover
    Dead,        // no velocity
}

impl ReorderPriority {
    /// Dashboard label, numbered so that a plain string sort keeps urgency order
    pub fn label(&self) -> &'static str {
        match self {
            ReorderPriority::Asap => "1 - Reorder ASAP",
            ReorderPriority::Watch => "2 - Watch Closely",
            ReorderPriority::Comfortable => "3 - Comfortable Cover",
            ReorderPriority::Dead => "4 - Dead Item",
        }
    }
}

impl fmt::Display for ReorderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderPriority::Asap => write!(f, "ASAP"),
            ReorderPriority::Watch => write!(f, "WATCH"),
            ReorderPriority::Comfortable => write!(f, "COMFORTABLE"),
            ReorderPriority::Dead => write!(f, "DEAD"),
        }
    }
}

// ==========================================
// Table kind (which upload a table came from)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Inventory,
    Sales,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Inventory => write!(f, "inventory"),
            TableKind::Sales => write!(f, "sales"),
        }
    }
}

// ==========================================
// Semantic field (internal schema column)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticField {
    ProductName,
    Category,
    OnHandQuantity,
    QuantitySold,
}

impl fmt::Display for SemanticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticField::ProductName => write!(f, "product name"),
            SemanticField::Category => write!(f, "category"),
            SemanticField::OnHandQuantity => write!(f, "quantity on hand"),
            SemanticField::QuantitySold => write!(f, "quantity sold"),
        }
    }
}

// ==========================================
// Header location outcome
// ==========================================
// NotFound is not an error: callers fall back to row 0 and let
// column resolution report the real problem
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeaderLocation {
    /// A row matched every required keyword group.
    /// `confidence` = recognised cells / non-empty cells in that row
    Located { row: usize, confidence: f64 },
    /// No scanned row qualified
    NotFound { scanned_rows: usize },
}

impl HeaderLocation {
    /// Row index to promote to the header (0 when nothing qualified)
    pub fn row(&self) -> usize {
        match self {
            HeaderLocation::Located { row, .. } => *row,
            HeaderLocation::NotFound { .. } => 0,
        }
    }

    pub fn is_located(&self) -> bool {
        matches!(self, HeaderLocation::Located { .. })
    }
}

impl fmt::Display for HeaderLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderLocation::Located { row, confidence } => {
                write!(f, "header at row {} (confidence {:.2})", row, confidence)
            }
            HeaderLocation::NotFound { scanned_rows } => write!(
                f,
                "no header found in first {} rows, using row 0",
                scanned_rows
            ),
        }
    }
}

// ==========================================
// Metric filter (dashboard tile selection)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFilter {
    #[default]
    All,
    Watchlist,
    ReorderAsap,
}

impl MetricFilter {
    /// Whether a row tagged `priority` is visible under this filter
    pub fn admits(&self, priority: ReorderPriority) -> bool {
        match self {
            MetricFilter::All => true,
            MetricFilter::Watchlist => priority == ReorderPriority::Watch,
            MetricFilter::ReorderAsap => priority == ReorderPriority::Asap,
        }
    }
}

impl fmt::Display for MetricFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricFilter::All => write!(f, "all"),
            MetricFilter::Watchlist => write!(f, "watchlist"),
            MetricFilter::ReorderAsap => write!(f, "asap"),
        }
    }
}
