//! Chart drawing.
//!
//! This module is the only place that touches [`CanvasRenderingContext2d`].
//! `draw` reads the engine core's chart model and hover state and produces
//! pixels; it never mutates chart state. All geometry comes from [`layout`]
//! so drawing and hit-testing always agree on where things are.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::donut::{DONUT_TITLE, DonutChart};
use crate::engine::{ChartCore, ChartSpec};
use crate::format::units_label;
use crate::hit::HoverTarget;
use crate::layout::{self, BarSegment, Rect, RingGeometry};
use crate::stacked::StackedBarChart;

/// Primary text color.
const TEXT_COLOR: &str = "#1d1d1f";

/// Muted text for captions, tick labels, and the center unit caption.
const MUTED_TEXT_COLOR: &str = "#6b7280";

/// Grid lines behind the bars.
const GRID_COLOR: &str = "#e5e7eb";

/// Axis baseline under the bars.
const AXIS_COLOR: &str = "#d1d5db";

const TITLE_FONT: &str = "bold 18px system-ui, sans-serif";
const CENTER_FONT: &str = "bold 32px system-ui, sans-serif";
const CAPTION_FONT: &str = "14px system-ui, sans-serif";
const TICK_FONT: &str = "12px system-ui, sans-serif";
const TOOLTIP_TITLE_FONT: &str = "bold 14px system-ui, sans-serif";

const TOOLTIP_BG: &str = "rgba(0, 0, 0, 0.85)";
const TOOLTIP_TEXT: &str = "#ffffff";
const TOOLTIP_FOOTER_TEXT: &str = "#d1d5db";
const TOOLTIP_PADDING: f64 = 14.0;
const TOOLTIP_LINE_HEIGHT: f64 = 18.0;

const LEGEND_SWATCH: f64 = 12.0;
const LEGEND_ITEM_GAP: f64 = 22.0;

/// Draw the core's current chart into the context, or blank the surface
/// when no chart is set.
///
/// # Errors
/// Propagates any failing canvas call.
pub fn draw(ctx: &CanvasRenderingContext2d, core: &ChartCore) -> Result<(), JsValue> {
    let (w, h) = core.viewport();
    let dpr = core.dpr();
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);
    match core.spec() {
        Some(ChartSpec::Donut(chart)) => draw_donut(ctx, chart, core.hover(), w, h),
        Some(ChartSpec::StackedBar(chart)) => draw_stacked(ctx, chart, core.hover(), w, h),
        None => Ok(()),
    }
}

// =====
// Donut
// =====

fn draw_donut(
    ctx: &CanvasRenderingContext2d,
    chart: &DonutChart,
    hover: Option<HoverTarget>,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    draw_title(ctx, w)?;

    let ring = layout::ring_geometry(w, h);
    let band = ring.outer_radius - ring.inner_radius;
    if band > 0.0 {
        let mid_radius = (ring.outer_radius + ring.inner_radius) / 2.0;
        ctx.set_line_width(band);
        for (slice, (start, end)) in chart.slices.iter().zip(chart.slice_angles()) {
            if end <= start {
                continue;
            }
            ctx.set_stroke_style_str(slice.color);
            ctx.begin_path();
            if ctx.arc(ring.cx, ring.cy, mid_radius, start, end).is_ok() {
                ctx.stroke();
            }
        }
    }

    draw_donut_center(ctx, chart, ring)?;
    draw_legend(ctx, &chart.legend_entries(), w, h)?;

    if let Some(HoverTarget::Slice(index)) = hover {
        draw_donut_tooltip(ctx, chart, index, ring, w, h)?;
    }
    Ok(())
}

fn draw_title(ctx: &CanvasRenderingContext2d, w: f64) -> Result<(), JsValue> {
    ctx.set_font(TITLE_FONT);
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(DONUT_TITLE, w / 2.0, layout::TITLE_BAND / 2.0)
}

/// Quantity total in the ring hole, with a unit caption when non-zero.
fn draw_donut_center(
    ctx: &CanvasRenderingContext2d,
    chart: &DonutChart,
    ring: RingGeometry,
) -> Result<(), JsValue> {
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(CENTER_FONT);
    ctx.set_fill_style_str(TEXT_COLOR);
    match chart.center_secondary() {
        Some(caption) => {
            ctx.fill_text(&chart.center_primary(), ring.cx, ring.cy - 10.0)?;
            ctx.set_font(CAPTION_FONT);
            ctx.set_fill_style_str(MUTED_TEXT_COLOR);
            ctx.fill_text(caption, ring.cx, ring.cy + 20.0)
        }
        None => ctx.fill_text(&chart.center_primary(), ring.cx, ring.cy),
    }
}

fn draw_donut_tooltip(
    ctx: &CanvasRenderingContext2d,
    chart: &DonutChart,
    index: usize,
    ring: RingGeometry,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    let angles = chart.slice_angles();
    let Some((start, end)) = angles.get(index).copied() else {
        return Ok(());
    };
    let mid_angle = (start + end) / 2.0;
    let mid_radius = (ring.inner_radius + ring.outer_radius) / 2.0;
    let anchor_x = ring.cx + mid_angle.cos() * mid_radius;
    let anchor_y = ring.cy + mid_angle.sin() * mid_radius;
    let footer = chart.tooltip_footer();
    draw_tooltip(
        ctx,
        &chart.tooltip_title(index),
        &chart.tooltip_lines(index),
        Some(&footer),
        anchor_x,
        anchor_y,
        w,
        h,
    )
}

// =====
// Stacked bars
// =====

fn draw_stacked(
    ctx: &CanvasRenderingContext2d,
    chart: &StackedBarChart,
    hover: Option<HoverTarget>,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    let plot = layout::bar_plot_area(w, h);
    let ticks = layout::y_axis_ticks(chart.max_stack_total());
    let y_max = ticks.last().copied().unwrap_or(0.0);

    draw_bar_grid(ctx, &ticks, y_max, plot)?;
    draw_period_labels(ctx, &chart.labels, plot)?;

    let segments = layout::bar_segments(chart, plot, y_max);
    for segment in &segments {
        let color = chart.series.get(segment.series).map_or(TEXT_COLOR, |series| series.color);
        ctx.set_fill_style_str(color);
        ctx.fill_rect(segment.rect.x, segment.rect.y, segment.rect.width, segment.rect.height);
    }

    draw_legend(ctx, &chart.legend_entries(), w, h)?;

    if let Some(HoverTarget::Segment { series, period }) = hover {
        draw_bar_tooltip(ctx, chart, &segments, series, period, w, h)?;
    }
    Ok(())
}

fn draw_bar_grid(
    ctx: &CanvasRenderingContext2d,
    ticks: &[f64],
    y_max: f64,
    plot: Rect,
) -> Result<(), JsValue> {
    ctx.set_font(TICK_FONT);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    ctx.set_line_width(1.0);
    for tick in ticks {
        let y = tick_y(*tick, y_max, plot);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.begin_path();
        ctx.move_to(plot.x, y);
        ctx.line_to(plot.right(), y);
        ctx.stroke();
        ctx.set_fill_style_str(MUTED_TEXT_COLOR);
        ctx.fill_text(&units_label(*tick), plot.x - 8.0, y)?;
    }
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.begin_path();
    ctx.move_to(plot.x, plot.bottom());
    ctx.line_to(plot.right(), plot.bottom());
    ctx.stroke();
    Ok(())
}

fn tick_y(tick: f64, y_max: f64, plot: Rect) -> f64 {
    if y_max <= 0.0 {
        return plot.bottom();
    }
    plot.bottom() - tick / y_max * plot.height
}

fn draw_period_labels(
    ctx: &CanvasRenderingContext2d,
    labels: &[String],
    plot: Rect,
) -> Result<(), JsValue> {
    ctx.set_font(TICK_FONT);
    ctx.set_fill_style_str(MUTED_TEXT_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    let centers = layout::period_slot_centers(labels.len(), plot);
    for (label, x) in labels.iter().zip(centers) {
        ctx.fill_text(label, x, plot.bottom() + 8.0)?;
    }
    Ok(())
}

fn draw_bar_tooltip(
    ctx: &CanvasRenderingContext2d,
    chart: &StackedBarChart,
    segments: &[BarSegment],
    series: usize,
    period: usize,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    let Some(segment) =
        segments.iter().find(|seg| seg.series == series && seg.period == period)
    else {
        return Ok(());
    };
    let title = chart.labels.get(period).cloned().unwrap_or_default();
    let lines = [chart.tooltip_line(series, period)];
    draw_tooltip(ctx, &title, &lines, None, segment.rect.center_x(), segment.rect.y, w, h)
}

// =====
// Shared chrome
// =====

/// Centered swatch-and-label legend in the bottom band.
fn draw_legend(
    ctx: &CanvasRenderingContext2d,
    entries: &[(String, &'static str)],
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    if entries.is_empty() {
        return Ok(());
    }
    ctx.set_font(CAPTION_FONT);
    let mut widths = Vec::with_capacity(entries.len());
    let mut total = LEGEND_ITEM_GAP * (entries.len() - 1) as f64;
    for (label, _) in entries {
        let width = LEGEND_SWATCH + 6.0 + measured_text_width(ctx, label);
        widths.push(width);
        total += width;
    }
    if !total.is_finite() {
        return Ok(());
    }

    let mut x = (w - total) / 2.0;
    let y = h - layout::LEGEND_BAND / 2.0;
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    for ((label, color), width) in entries.iter().zip(&widths) {
        ctx.set_fill_style_str(color);
        ctx.fill_rect(x, y - LEGEND_SWATCH / 2.0, LEGEND_SWATCH, LEGEND_SWATCH);
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.fill_text(label, x + LEGEND_SWATCH + 6.0, y)?;
        x += width + LEGEND_ITEM_GAP;
    }
    Ok(())
}

/// Dark tooltip box near the anchor point, clamped to the viewport.
#[allow(clippy::too_many_arguments)]
fn draw_tooltip(
    ctx: &CanvasRenderingContext2d,
    title: &str,
    lines: &[String],
    footer: Option<&str>,
    anchor_x: f64,
    anchor_y: f64,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    ctx.set_font(TOOLTIP_TITLE_FONT);
    let mut text_width = measured_text_width(ctx, title);
    ctx.set_font(CAPTION_FONT);
    for line in lines {
        text_width = text_width.max(measured_text_width(ctx, line));
    }
    if let Some(footer) = footer {
        text_width = text_width.max(measured_text_width(ctx, footer));
    }
    if !text_width.is_finite() {
        return Ok(());
    }

    let line_count = 1 + lines.len() + usize::from(footer.is_some());
    let box_w = text_width + TOOLTIP_PADDING * 2.0;
    let box_h = line_count as f64 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0;

    let x = (anchor_x - box_w / 2.0).clamp(4.0, (w - box_w - 4.0).max(4.0));
    let mut y = anchor_y - box_h - 12.0;
    if y < 4.0 {
        y = (anchor_y + 12.0).min((h - box_h - 4.0).max(4.0));
    }

    ctx.set_fill_style_str(TOOLTIP_BG);
    ctx.fill_rect(x, y, box_w, box_h);

    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    let text_x = x + TOOLTIP_PADDING;
    let mut line_y = y + TOOLTIP_PADDING + TOOLTIP_LINE_HEIGHT / 2.0;

    ctx.set_font(TOOLTIP_TITLE_FONT);
    ctx.set_fill_style_str(TOOLTIP_TEXT);
    ctx.fill_text(title, text_x, line_y)?;

    ctx.set_font(CAPTION_FONT);
    for line in lines {
        line_y += TOOLTIP_LINE_HEIGHT;
        ctx.fill_text(line, text_x, line_y)?;
    }
    if let Some(footer) = footer {
        line_y += TOOLTIP_LINE_HEIGHT;
        ctx.set_fill_style_str(TOOLTIP_FOOTER_TEXT);
        ctx.fill_text(footer, text_x, line_y)?;
    }
    Ok(())
}

/// Width of `text` in the current font. Measurement failure reads as
/// infinite so callers treat the text as unplaceable and skip drawing.
fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => f64::INFINITY,
    }
}
