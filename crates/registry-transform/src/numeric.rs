//! Numeric coercion for age-style columns.

/// Parse a cell value as a number.
///
/// Handles surrounding whitespace and thousands separators. Returns None for
/// empty or unparseable values; coercion never raises.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned = trimmed
        .replace(',', "")
        .replace(' ', "")
        .replace('\u{a0}', ""); // non-breaking space

    cleaned.parse().ok()
}

/// Parse an age value: numeric and non-negative, anything else is null.
pub fn parse_age(value: &str) -> Option<f64> {
    parse_numeric(value).filter(|age| *age >= 0.0)
}
