//! Loose JSON readers for server-provided chart payloads.
//!
//! The payload shape is owned by the server and arrives as untyped JSON.
//! Readers here never fail: entries without a usable name are dropped and
//! missing or non-numeric measurements read as zero, so malformed data
//! degrades to an empty or zeroed chart instead of an error.

use serde_json::Value;

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

/// Visualization kinds the renderer recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Donut,
    StackedBar,
}

impl ChartKind {
    /// Parse a server `visualization_type` tag. Unknown tags map to `None`,
    /// which callers treat as "mount no chart".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "donut" | "donut-chart" => Some(Self::Donut),
            "stacked-bar" | "histogram" => Some(Self::StackedBar),
            _ => None,
        }
    }
}

/// One named demand measurement: a monetary `value` and a unit `quantity`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDatum {
    pub name: String,
    pub value: f64,
    pub quantity: f64,
}

impl CategoryDatum {
    /// Read a datum from a loose JSON object. Returns `None` when the entry
    /// has no string `name`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let name = value.get("name").and_then(Value::as_str)?;
        Some(Self {
            name: name.to_owned(),
            value: number_or_zero(value.get("value")),
            quantity: number_or_zero(value.get("quantity")),
        })
    }
}

/// One time-sliced bucket of category measurements.
///
/// `start_date` keeps the raw server string; blank strings are treated as
/// absent so they label the same way as a missing field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodBucket {
    pub start_date: Option<String>,
    pub entries: Vec<CategoryDatum>,
}

impl PeriodBucket {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let start_date = value
            .get("startDate")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::to_owned);
        let entries = value
            .get("stackDataList")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(CategoryDatum::from_value).collect())
            .unwrap_or_default();
        Self { start_date, entries }
    }
}

/// Normalize a payload into a period sequence. A lone object becomes a
/// one-element sequence; an array maps bucket by bucket.
#[must_use]
pub fn period_buckets(value: &Value) -> Vec<PeriodBucket> {
    match value.as_array() {
        Some(items) => items.iter().map(PeriodBucket::from_value).collect(),
        None => vec![PeriodBucket::from_value(value)],
    }
}

fn number_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}
