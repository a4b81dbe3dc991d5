//! Donut chart model: total aggregate demand split by category.

use std::f64::consts::{PI, TAU};

use serde_json::Value;

use crate::data::{CategoryDatum, PeriodBucket};
use crate::format::{group_thousands, percentage_label, units_label};
use crate::palette::category_color;

#[cfg(test)]
#[path = "donut_test.rs"]
mod donut_test;

/// Category template in display order. Server entries with any other name
/// are ignored; filtering keeps this relative order.
const CATEGORY_ORDER: [&str; 3] = ["Firm Order", "Overdue", "Forecasted"];

/// Heading drawn above the ring.
pub const DONUT_TITLE: &str = "Total Aggregate Demand";

/// One kept category slice.
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub name: String,
    pub value: f64,
    pub quantity: f64,
    pub color: &'static str,
}

/// Normalized donut chart.
///
/// The ring, center label, and tooltips all read `quantity`; `value` only
/// participates in deciding which slices are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonutChart {
    pub slices: Vec<DonutSlice>,
    pub total_quantity: f64,
}

impl DonutChart {
    /// Build the chart from a single-period payload.
    ///
    /// Seeds the category template at zero, overwrites template entries by
    /// exact name (last write per name wins, no merging), then keeps entries
    /// with a positive value or quantity.
    #[must_use]
    pub fn from_value(data: &Value) -> Self {
        Self::from_bucket(&PeriodBucket::from_value(data))
    }

    #[must_use]
    pub fn from_bucket(bucket: &PeriodBucket) -> Self {
        let mut template: Vec<CategoryDatum> = CATEGORY_ORDER
            .iter()
            .map(|name| CategoryDatum { name: (*name).to_owned(), value: 0.0, quantity: 0.0 })
            .collect();
        for entry in &bucket.entries {
            if let Some(slot) = template.iter_mut().find(|slot| slot.name == entry.name) {
                *slot = entry.clone();
            }
        }
        let slices: Vec<DonutSlice> = template
            .into_iter()
            .filter(|datum| datum.value > 0.0 || datum.quantity > 0.0)
            .map(|datum| DonutSlice {
                color: category_color(&datum.name),
                name: datum.name,
                value: datum.value,
                quantity: datum.quantity,
            })
            .collect();
        let total_quantity = slices.iter().map(|slice| slice.quantity).sum();
        Self { slices, total_quantity }
    }

    /// Start and end angle of each slice in radians, clockwise from twelve
    /// o'clock. A slice's sweep is its share of the quantity total, so a
    /// zero-quantity slice (kept for its value) occupies no arc, and a zero
    /// total leaves every slice empty.
    #[must_use]
    pub fn slice_angles(&self) -> Vec<(f64, f64)> {
        let mut start = -PI / 2.0;
        self.slices
            .iter()
            .map(|slice| {
                let sweep = if self.total_quantity > 0.0 {
                    slice.quantity / self.total_quantity * TAU
                } else {
                    0.0
                };
                let span = (start, start + sweep);
                start += sweep;
                span
            })
            .collect()
    }

    /// Large center figure: the grouped quantity total, or the literal `"0"`.
    #[must_use]
    pub fn center_primary(&self) -> String {
        if self.total_quantity > 0.0 {
            group_thousands(self.total_quantity)
        } else {
            "0".to_owned()
        }
    }

    /// Caption under the center figure. Absent when the total is zero.
    #[must_use]
    pub fn center_secondary(&self) -> Option<&'static str> {
        (self.total_quantity > 0.0).then_some("units")
    }

    /// Tooltip heading for the slice at `index`.
    #[must_use]
    pub fn tooltip_title(&self, index: usize) -> String {
        self.slices.get(index).map_or_else(String::new, |slice| slice.name.clone())
    }

    /// Tooltip body lines for the slice at `index`.
    #[must_use]
    pub fn tooltip_lines(&self, index: usize) -> Vec<String> {
        let Some(slice) = self.slices.get(index) else {
            return Vec::new();
        };
        vec![
            format!("Quantity: {}", units_label(slice.quantity)),
            format!(
                "Percentage: {}% of total",
                percentage_label(slice.quantity, self.total_quantity)
            ),
        ]
    }

    /// Tooltip footer with the ring total.
    #[must_use]
    pub fn tooltip_footer(&self) -> String {
        format!("Total: {}", units_label(self.total_quantity))
    }

    /// Legend entries as `(label, swatch color)` pairs, in slice order.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<(String, &'static str)> {
        self.slices.iter().map(|slice| (slice.name.clone(), slice.color)).collect()
    }
}
