//! Stacked-bar chart model: demand per period, split by category.

use serde_json::Value;

use crate::data::{PeriodBucket, period_buckets};
use crate::format::{period_label, units_label};
use crate::palette::series_color;

#[cfg(test)]
#[path = "stacked_test.rs"]
mod stacked_test;

/// On period charts, firm orders display under the forecasted label. The
/// donut keeps "Firm Order" as its own label; the renaming applies here only
/// and never touches the matching key.
const RELABELED_CATEGORY: &str = "Firm Order";
const RELABEL_DISPLAY: &str = "Forecasted";

/// One stacked series across all periods.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    /// The category name as it appears in the payload, used for matching.
    pub key: String,
    /// Legend and tooltip label.
    pub label: String,
    pub color: &'static str,
    /// Quantity per period, index-aligned with the chart's labels.
    pub values: Vec<f64>,
}

/// Normalized stacked-bar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackedBarChart {
    /// One display label per period, in payload order.
    pub labels: Vec<String>,
    /// One series per distinct category, in order of first appearance.
    pub series: Vec<StackedSeries>,
}

impl StackedBarChart {
    /// Build the chart from a payload holding either a period sequence or a
    /// lone period object.
    #[must_use]
    pub fn from_value(data: &Value) -> Self {
        Self::from_buckets(&period_buckets(data))
    }

    #[must_use]
    pub fn from_buckets(buckets: &[PeriodBucket]) -> Self {
        let labels = buckets
            .iter()
            .map(|bucket| period_label(bucket.start_date.as_deref()))
            .collect();

        let mut names: Vec<String> = Vec::new();
        for bucket in buckets {
            for entry in &bucket.entries {
                if !names.iter().any(|name| name == &entry.name) {
                    names.push(entry.name.clone());
                }
            }
        }

        let series = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let values = buckets
                    .iter()
                    .map(|bucket| {
                        bucket
                            .entries
                            .iter()
                            .find(|entry| &entry.name == name)
                            .map_or(0.0, |entry| entry.quantity)
                    })
                    .collect();
                StackedSeries {
                    key: name.clone(),
                    label: display_label(name),
                    color: series_color(index),
                    values,
                }
            })
            .collect();

        Self { labels, series }
    }

    /// Sum of all series values at one period index.
    #[must_use]
    pub fn stack_total(&self, period: usize) -> f64 {
        self.series
            .iter()
            .map(|series| series.values.get(period).copied().unwrap_or(0.0))
            .sum()
    }

    /// Stacked height of the tallest period, used to scale the y axis.
    #[must_use]
    pub fn max_stack_total(&self) -> f64 {
        (0..self.labels.len()).map(|period| self.stack_total(period)).fold(0.0, f64::max)
    }

    /// Tooltip line for one hovered segment, e.g. `"Overdue: 149 units"`.
    #[must_use]
    pub fn tooltip_line(&self, series: usize, period: usize) -> String {
        let Some(series) = self.series.get(series) else {
            return String::new();
        };
        let quantity = series.values.get(period).copied().unwrap_or(0.0);
        format!("{}: {}", series.label, units_label(quantity))
    }

    /// Legend entries as `(label, swatch color)` pairs, in series order.
    #[must_use]
    pub fn legend_entries(&self) -> Vec<(String, &'static str)> {
        self.series.iter().map(|series| (series.label.clone(), series.color)).collect()
    }
}

fn display_label(name: &str) -> String {
    if name == RELABELED_CATEGORY {
        RELABEL_DISPLAY.to_owned()
    } else {
        name.to_owned()
    }
}
