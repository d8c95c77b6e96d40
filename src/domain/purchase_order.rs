// ==========================================
// Reorder Forecast - purchase order
// ==========================================
// Peripheral: line items, totals, plain-text rendering.
// Seeded from forecast rows that carry a reorder quantity.
// ==========================================

use crate::domain::forecast::ForecastRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

pub const DEFAULT_TERMS: &str = "Net 30";

const RULE_WIDTH: usize = 60;

// ==========================================
// PoLine
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoLine {
    pub sku: String,
    pub description: String,
    pub units: f64,
    pub unit_cost: f64,
}

impl PoLine {
    pub fn line_total(&self) -> f64 {
        self.units * self.unit_cost
    }
}

// ==========================================
// PurchaseOrder
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub po_number: String,
    pub po_date: NaiveDate,
    pub vendor: String,
    pub buyer: String,
    pub terms: String,
    pub lines: Vec<PoLine>,
}

impl PurchaseOrder {
    pub fn new(
        po_number: impl Into<String>,
        po_date: NaiveDate,
        vendor: impl Into<String>,
        buyer: impl Into<String>,
    ) -> Self {
        Self {
            po_number: po_number.into(),
            po_date,
            vendor: vendor.into(),
            buyer: buyer.into(),
            terms: DEFAULT_TERMS.to_string(),
            lines: Vec::new(),
        }
    }

    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    pub fn add_line(&mut self, line: PoLine) {
        self.lines.push(line);
    }

    /// One line per forecast row with a positive reorder quantity.
    /// Unit cost starts at 0 for the buyer to fill in.
    pub fn seed_from_forecast(&mut self, rows: &[ForecastRow]) {
        for row in rows.iter().filter(|r| r.reorder_qty > 0) {
            self.lines.push(PoLine {
                sku: String::new(),
                description: format!("{} {} {}", row.category, row.strain_type, row.package_size),
                units: row.reorder_qty as f64,
                unit_cost: 0.0,
            });
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(PoLine::line_total).sum()
    }

    /// Default download file name, `PO_<number>.txt`
    pub fn file_name(&self) -> String {
        let number = self.po_number.trim();
        if number.is_empty() {
            "PO_draft.txt".to_string()
        } else {
            format!("PO_{}.txt", number)
        }
    }

    /// Plain-text purchase order document
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // writeln! into a String cannot fail
        let _ = writeln!(out, "Purchase Order");
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(out);
        let _ = writeln!(out, "PO Number: {}", self.po_number);
        let _ = writeln!(out, "PO Date:   {}", self.po_date.format("%Y-%m-%d"));
        let _ = writeln!(out, "Vendor:    {}", self.vendor);
        let _ = writeln!(out, "Buyer:     {}", self.buyer);
        let _ = writeln!(out, "Terms:     {}", self.terms);
        let _ = writeln!(out);
        let _ = writeln!(out, "Line Items:");
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        for line in &self.lines {
            let _ = writeln!(
                out,
                "{} | {} | {} @ ${:.2} = ${:.2}",
                line.sku,
                line.description,
                format_units(line.units),
                line.unit_cost,
                line.line_total()
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Subtotal: ${}", format_money(self.subtotal()));
        out
    }
}

fn format_units(units: f64) -> String {
    if units.fract() == 0.0 {
        format!("{}", units as i64)
    } else {
        format!("{}", units)
    }
}

/// `1234.5` → `1,234.50`
fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, cents)
}
