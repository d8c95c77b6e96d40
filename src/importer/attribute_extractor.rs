// ==========================================
// Reorder Forecast - attribute extractors
// ==========================================
// strain_type and package_size derived from free-text product names.
// Matching runs on normalize_text() output (lower-case, single spaces).
// ==========================================

use crate::domain::records::UNSPECIFIED;
use crate::importer::importer_trait::AttributeExtractor;
use crate::importer::text_normalizer::normalize_text;
use regex::Regex;
use std::sync::LazyLock;

/// Base strain types, in priority order
const STRAIN_BASES: &[&str] = &["indica", "sativa", "hybrid", "cbd"];

const DISPOSABLE_TOKENS: &[&str] = &["disposable", "dispo", "all-in-one", "all in one"];
const VAPE_CONTEXT_TOKENS: &[&str] = &["vape", "cart", "cartridge", "pen", "pod"];
const INFUSED_TOKENS: &[&str] = &["infused"];
const PRE_ROLL_CONTEXT_TOKENS: &[&str] = &["pre roll", "pre-roll", "preroll", "joint", "cone"];

const DISPOSABLE_QUALIFIER: &str = "disposable";
const INFUSED_QUALIFIER: &str = "infused";

/// Canonical ounce token
pub const OUNCE_TOKEN: &str = "28g";
/// Default vape size when the unit is omitted
pub const HALF_GRAM_TOKEN: &str = "0.5g";

static MG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s?mg").expect("Invalid regex"));

static FRACTION_OZ_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s?/\s?(\d+)\s?(?:ounces?|oz)\b").expect("Invalid regex")
});

static GRAM_OUNCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.?\d*|\.\d+)\s?(grams?|gms?|gr|g|ounces?|oz)\b").expect("Invalid regex")
});

static BARE_HALF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\d.])0?\.5(?:[^\d]|$)").expect("Invalid regex"));

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

// ==========================================
// Strain type
// ==========================================

/// Strain type from a product name, with category as extra context
/// for the vape / pre-roll overlays
pub fn extract_strain_type(name: &str, category: &str) -> String {
    let name = normalize_text(name);
    let context = format!("{} {}", name, normalize_text(category));

    let base = STRAIN_BASES
        .iter()
        .find(|b| name.contains(*b))
        .copied()
        .unwrap_or(UNSPECIFIED);

    let qualifier = if contains_any(&name, DISPOSABLE_TOKENS)
        && contains_any(&context, VAPE_CONTEXT_TOKENS)
    {
        Some(DISPOSABLE_QUALIFIER)
    } else if contains_any(&name, INFUSED_TOKENS) && contains_any(&context, PRE_ROLL_CONTEXT_TOKENS)
    {
        Some(INFUSED_QUALIFIER)
    } else {
        None
    };

    match qualifier {
        Some(q) if base == UNSPECIFIED => q.to_string(),
        Some(q) => format!("{} {}", base, q),
        None => base.to_string(),
    }
}

// ==========================================
// Package size
// ==========================================

/// "3." → "3", ".5" → "0.5"
fn tidy_number(number: &str) -> String {
    let trimmed = number.trim_end_matches('.');
    if trimmed.starts_with('.') {
        format!("0{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// "gram", "gms", "gr" → "g"; "ounce", "oz" → "oz"
fn canonical_unit(unit: &str) -> &'static str {
    if unit.starts_with('o') {
        "oz"
    } else {
        "g"
    }
}

/// An ounce in any spelling folds to "28g"
fn fold_ounce(number: &str, unit: &str) -> String {
    let value = number.parse::<f64>().ok();
    match (unit, value) {
        ("oz", Some(v)) if v == 1.0 => OUNCE_TOKEN.to_string(),
        ("g", Some(v)) if v == 28.0 => OUNCE_TOKEN.to_string(),
        _ => format!("{}{}", number, unit),
    }
}

fn fraction_of_ounce(numerator: &str, denominator: &str) -> String {
    match (numerator, denominator) {
        ("1", "8") => "3.5g".to_string(),
        ("1", "4") => "7g".to_string(),
        ("1", "2") => "14g".to_string(),
        ("1", "1") => OUNCE_TOKEN.to_string(),
        _ => format!("{}/{}oz", numerator, denominator),
    }
}

/// Package size token from free text.
/// `context` (usually the category) only feeds the vape half-gram rule.
pub fn extract_size(text: &str, context: Option<&str>) -> String {
    let text = normalize_text(text);

    // 1. milligrams
    if let Some(caps) = MG_RE.captures(&text) {
        return format!("{}mg", &caps[1]);
    }

    // 2. explicit grams / ounces; fractions first so "1/8 oz" is not read as "8oz"
    if let Some(caps) = FRACTION_OZ_RE.captures(&text) {
        return fraction_of_ounce(&caps[1], &caps[2]);
    }
    if let Some(caps) = GRAM_OUNCE_RE.captures(&text) {
        let number = tidy_number(&caps[1]);
        let unit = canonical_unit(&caps[2]);
        return fold_ounce(&number, unit);
    }

    // 3. vape without a unit: bare 0.5 / .5 means half a gram
    let context = context.map(normalize_text).unwrap_or_default();
    let vape_context =
        contains_any(&text, VAPE_CONTEXT_TOKENS) || contains_any(&context, VAPE_CONTEXT_TOKENS);
    if vape_context && BARE_HALF_RE.is_match(&text) {
        return HALF_GRAM_TOKEN.to_string();
    }

    UNSPECIFIED.to_string()
}

// ==========================================
// PatternAttributeExtractor
// ==========================================
pub struct PatternAttributeExtractor;

impl AttributeExtractor for PatternAttributeExtractor {
    fn extract_strain_type(&self, name: &str, category: &str) -> String {
        extract_strain_type(name, category)
    }

    fn extract_size(&self, text: &str, context: Option<&str>) -> String {
        extract_size(text, context)
    }
}
