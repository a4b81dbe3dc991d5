//! Plot geometry shared by the renderer and pointer hit-testing.
//!
//! Everything is computed in canvas CSS pixels from the viewport size and the
//! normalized chart model, so the same numbers drive drawing and hover
//! detection.

use crate::stacked::StackedBarChart;

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Vertical band reserved for the chart title.
pub const TITLE_BAND: f64 = 48.0;

/// Vertical band reserved for the bottom legend.
pub const LEGEND_BAND: f64 = 40.0;

/// The donut hole radius as a fraction of the outer radius.
pub const DONUT_CUTOUT: f64 = 0.6;

/// Outer margin around plot areas.
const MARGIN: f64 = 16.0;

/// Left gutter reserved for y-axis tick labels.
const AXIS_GUTTER: f64 = 72.0;

/// Band under the bar plot reserved for period labels.
const X_LABEL_BAND: f64 = 28.0;

/// Each bar's width as a fraction of its period slot.
const BAR_WIDTH_FRACTION: f64 = 0.6;

/// Upper bound on y-axis intervals; the step is rounded up to a nice value.
const TARGET_TICK_COUNT: f64 = 5.0;

/// An axis-aligned rectangle in canvas CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Donut ring placement within a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

/// Place the donut ring between the title band and the bottom legend.
#[must_use]
pub fn ring_geometry(viewport_w: f64, viewport_h: f64) -> RingGeometry {
    let plot_w = (viewport_w - 2.0 * MARGIN).max(0.0);
    let plot_h = (viewport_h - TITLE_BAND - LEGEND_BAND - MARGIN).max(0.0);
    let outer_radius = (plot_w.min(plot_h) / 2.0).max(0.0);
    RingGeometry {
        cx: viewport_w / 2.0,
        cy: TITLE_BAND + plot_h / 2.0,
        outer_radius,
        inner_radius: outer_radius * DONUT_CUTOUT,
    }
}

/// Plot area for the stacked-bar chart, leaving room for the axis gutter,
/// the period labels, and the bottom legend.
#[must_use]
pub fn bar_plot_area(viewport_w: f64, viewport_h: f64) -> Rect {
    Rect::new(
        AXIS_GUTTER,
        MARGIN,
        (viewport_w - AXIS_GUTTER - MARGIN).max(0.0),
        (viewport_h - MARGIN - X_LABEL_BAND - LEGEND_BAND).max(0.0),
    )
}

/// One drawable bar segment, tagged with its series and period indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSegment {
    pub series: usize,
    pub period: usize,
    pub rect: Rect,
}

/// Lay out stacked segments, first series at the bottom of each bar.
///
/// Zero and negative quantities produce no segment. `y_max` is the top of
/// the axis; a non-positive `y_max` lays out nothing.
#[must_use]
pub fn bar_segments(chart: &StackedBarChart, plot: Rect, y_max: f64) -> Vec<BarSegment> {
    let mut segments = Vec::new();
    if chart.labels.is_empty() || y_max <= 0.0 || plot.width <= 0.0 || plot.height <= 0.0 {
        return segments;
    }
    let slot_w = plot.width / chart.labels.len() as f64;
    let bar_w = slot_w * BAR_WIDTH_FRACTION;
    for period in 0..chart.labels.len() {
        let x = plot.x + period as f64 * slot_w + (slot_w - bar_w) / 2.0;
        let mut top = plot.bottom();
        for (series, data) in chart.series.iter().enumerate() {
            let quantity = data.values.get(period).copied().unwrap_or(0.0);
            if quantity <= 0.0 {
                continue;
            }
            let height = quantity / y_max * plot.height;
            top -= height;
            segments.push(BarSegment { series, period, rect: Rect::new(x, top, bar_w, height) });
        }
    }
    segments
}

/// Center x of each period slot, for positioning period labels.
#[must_use]
pub fn period_slot_centers(period_count: usize, plot: Rect) -> Vec<f64> {
    if period_count == 0 || plot.width <= 0.0 {
        return Vec::new();
    }
    let slot_w = plot.width / period_count as f64;
    (0..period_count).map(|i| plot.x + (i as f64 + 0.5) * slot_w).collect()
}

/// Evenly spaced y-axis ticks from zero through a rounded-up maximum.
///
/// Always returns at least `[0.0]`; with a positive maximum the last tick is
/// the first step multiple at or above it.
#[must_use]
pub fn y_axis_ticks(max_value: f64) -> Vec<f64> {
    if max_value <= 0.0 || !max_value.is_finite() {
        return vec![0.0];
    }
    let step = nice_step(max_value / TARGET_TICK_COUNT);
    let count = (max_value / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Round a raw interval up to 1, 2, or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let scaled = raw / magnitude;
    let factor = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}
