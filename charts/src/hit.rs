//! Pointer hit-testing: maps a canvas position to the chart element under it.

use std::f64::consts::TAU;

use crate::donut::DonutChart;
use crate::layout::{BarSegment, RingGeometry};

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

/// The chart element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// A donut slice, by slice index.
    Slice(usize),
    /// A stacked-bar segment, by series and period indices.
    Segment { series: usize, period: usize },
}

/// Test a pointer position against the donut ring.
///
/// Hits require the pointer to sit inside the ring band; the hole and the
/// area outside the ring both miss.
#[must_use]
pub fn hit_donut(chart: &DonutChart, ring: RingGeometry, x: f64, y: f64) -> Option<HoverTarget> {
    let dx = x - ring.cx;
    let dy = y - ring.cy;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance < ring.inner_radius || distance > ring.outer_radius {
        return None;
    }
    let angle = dy.atan2(dx);
    for (index, (start, end)) in chart.slice_angles().into_iter().enumerate() {
        if angle_in_span(angle, start, end) {
            return Some(HoverTarget::Slice(index));
        }
    }
    None
}

/// Slice spans start at twelve o'clock and can run past +π, while `atan2`
/// stays within (-π, π]; rotate the angle forward until it is comparable.
fn angle_in_span(angle: f64, start: f64, end: f64) -> bool {
    if end <= start {
        return false;
    }
    let mut rotated = angle;
    while rotated < start {
        rotated += TAU;
    }
    rotated < end
}

/// Test a pointer position against laid-out bar segments.
#[must_use]
pub fn hit_bars(segments: &[BarSegment], x: f64, y: f64) -> Option<HoverTarget> {
    segments
        .iter()
        .find(|segment| segment.rect.contains(x, y))
        .map(|segment| HoverTarget::Segment { series: segment.series, period: segment.period })
}
