//! Fixed colors for demand categories and rotating series.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Medium blue used for firm orders, and the fallback for any name the
/// category map does not recognize.
pub const FIRM_ORDER_COLOR: &str = "#3b82f6";

/// Dark blue used for overdue demand.
pub const OVERDUE_COLOR: &str = "#1e40af";

/// Gray used for forecasted demand.
pub const FORECASTED_COLOR: &str = "#9ca3af";

/// Rotating palette for stacked-bar series, applied in series order.
pub const SERIES_PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Color for a donut category by name. Unrecognized names fall back to the
/// firm-order blue.
#[must_use]
pub fn category_color(name: &str) -> &'static str {
    match name {
        "Overdue" => OVERDUE_COLOR,
        "Forecasted" => FORECASTED_COLOR,
        _ => FIRM_ORDER_COLOR,
    }
}

/// Color for the series at `index`, cycling once the palette is exhausted.
#[must_use]
pub fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
