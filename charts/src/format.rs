//! Label text formatting: grouped numbers, percentages, period labels.
//!
//! Everything here is pure string production. The renderer and the chart
//! models call into this module so tooltip and axis text stays consistent
//! between the two chart kinds.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a number with comma thousands separators, en-US style.
///
/// Fractions are kept to at most three places with trailing zeros trimmed.
/// Non-finite input formats as `"0"`.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let negative = value < 0.0;
    let text = format!("{:.3}", value.abs());
    let (int_digits, frac_digits) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (text.as_str(), ""),
    };
    let mut grouped = String::with_capacity(int_digits.len() + int_digits.len() / 3 + 2);
    if negative && (int_digits != "0" || !frac_digits.is_empty()) {
        grouped.push('-');
    }
    for (i, digit) in int_digits.char_indices() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !frac_digits.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_digits);
    }
    grouped
}

/// Grouped quantity with the unit suffix, e.g. `"4,848 units"`.
#[must_use]
pub fn units_label(value: f64) -> String {
    format!("{} units", group_thousands(value))
}

/// Share of `part` in `total` as a one-decimal percentage string.
///
/// A zero or negative total yields the literal `"0"` rather than dividing.
#[must_use]
pub fn percentage_label(part: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}", part / total * 100.0)
    } else {
        "0".to_owned()
    }
}

/// Display label for a period start date.
///
/// Absent or blank dates label as `"Unknown"`; dates that fail to parse label
/// as `"Invalid Date"`. Valid dates format as abbreviated month plus year,
/// e.g. `"Jan 2024"`.
#[must_use]
pub fn period_label(start_date: Option<&str>) -> String {
    let Some(raw) = start_date else {
        return "Unknown".to_owned();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Unknown".to_owned();
    }
    match parse_start_date(trimmed) {
        Some(date) => date.format("%b %Y").to_string(),
        None => "Invalid Date".to_owned(),
    }
}

/// Accepts the date shapes the data service emits: RFC 3339 timestamps,
/// naive timestamps without an offset, and bare dates.
fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(stamp.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    None
}
