// ==========================================
// Reorder Forecast - data cleaner
// ==========================================
// TRIM / NULL normalization / total numeric coercion.
// Quantity math must never fail mid-aggregation: anything that does
// not parse as a finite, non-negative number becomes 0.
// ==========================================

/// Result of coercing one quantity cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced {
    pub value: f64,
    /// true when the cell was blank, non-numeric, non-finite or negative
    pub coerced: bool,
}

impl Coerced {
    fn parsed(value: f64) -> Self {
        Self {
            value,
            coerced: false,
        }
    }

    fn zero() -> Self {
        Self {
            value: 0.0,
            coerced: true,
        }
    }
}

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// Blank / whitespace-only → None
    pub fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Parse a quantity cell.
    ///
    /// # Accepted
    /// - plain numbers: "12", "3.5", " 7 "
    /// - thousands separators: "1,250"
    ///
    /// # Coerced to 0
    /// - blank, text, NaN/inf, negative values
    pub fn coerce_quantity(&self, value: Option<&str>) -> Coerced {
        let raw = match self.normalize_null(value) {
            Some(v) => v,
            None => return Coerced::zero(),
        };

        let compact: String = raw.chars().filter(|c| *c != ',').collect();
        match compact.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Coerced::parsed(v),
            _ => Coerced::zero(),
        }
    }
}
