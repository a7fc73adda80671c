//! Best-effort date parsing.
//!
//! Registry exports mix ISO, Brazilian day-first, and occasional US or
//! textual-month formats in the same column. Parsing is lenient throughout:
//! empty or unparseable values become None, never an error. Day-first forms
//! are tried before month-first, matching the source data's locale.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a date value, trying each known format in order.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    const DATE_FORMATS: [&str; 9] = [
        "%Y-%m-%d",
        "%d/%m/%Y", // Brazilian day-first
        "%d-%m-%Y",
        "%d.%m.%Y",
        "%Y/%m/%d",
        "%m/%d/%Y", // US, only reached when day-first failed
        "%Y%m%d",
        "%d-%b-%Y", // 15-Jan-2024
        "%d %b %Y",
    ];
    for fmt in &DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }

    const DATETIME_FORMATS: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }

    None
}
