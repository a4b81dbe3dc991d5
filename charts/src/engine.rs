//! Chart lifecycle: the canvas-owning engine and its testable core.
//!
//! ARCHITECTURE
//! ============
//! `ChartCore` holds everything that can be exercised without a browser: the
//! current chart model, hover state, and the viewport numbers that drive
//! layout. `ChartEngine` wraps a core together with the one canvas element it
//! draws into. A canvas has at most one engine, and an engine holds at most
//! one chart; setting a new chart drops the previous one before the next
//! draw, so two charts never coexist on the same surface.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::data::ChartKind;
use crate::donut::DonutChart;
use crate::hit::{self, HoverTarget};
use crate::layout;
use crate::render;
use crate::stacked::StackedBarChart;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// A fully normalized, renderable chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Donut(DonutChart),
    StackedBar(StackedBarChart),
}

impl ChartSpec {
    /// Normalize a server payload into a renderable chart.
    ///
    /// Returns `None` for unrecognized visualization types; callers treat
    /// that as "mount no chart" rather than drawing an empty widget.
    #[must_use]
    pub fn from_parts(visualization_type: &str, data: &serde_json::Value) -> Option<Self> {
        match ChartKind::parse(visualization_type)? {
            ChartKind::Donut => Some(Self::Donut(DonutChart::from_value(data))),
            ChartKind::StackedBar => Some(Self::StackedBar(StackedBarChart::from_value(data))),
        }
    }
}

/// Chart state minus the canvas element.
#[derive(Debug)]
pub struct ChartCore {
    spec: Option<ChartSpec>,
    hover: Option<HoverTarget>,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
}

impl Default for ChartCore {
    fn default() -> Self {
        Self { spec: None, hover: None, viewport_w: 0.0, viewport_h: 0.0, dpr: 1.0 }
    }
}

impl ChartCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current chart with a new one. Hover state resets because
    /// indices from the old chart are meaningless against the new model.
    pub fn set_spec(&mut self, spec: ChartSpec) {
        self.hover = None;
        self.spec = Some(spec);
    }

    /// Drop the current chart, leaving an empty surface.
    pub fn clear(&mut self) {
        self.hover = None;
        self.spec = None;
    }

    #[must_use]
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverTarget> {
        self.hover
    }

    pub fn set_viewport(&mut self, viewport_w: f64, viewport_h: f64, dpr: f64) {
        self.viewport_w = viewport_w;
        self.viewport_h = viewport_h;
        self.dpr = dpr;
    }

    #[must_use]
    pub fn viewport(&self) -> (f64, f64) {
        (self.viewport_w, self.viewport_h)
    }

    #[must_use]
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    /// Update hover state from a pointer position. Returns true when the
    /// hovered element changed and the chart needs a redraw.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        let next = self.hit_test(x, y);
        if next == self.hover {
            return false;
        }
        self.hover = next;
        true
    }

    /// Drop hover state when the pointer leaves the surface. Returns true
    /// when a tooltip was showing and needs to be erased.
    pub fn pointer_left(&mut self) -> bool {
        if self.hover.is_none() {
            return false;
        }
        self.hover = None;
        true
    }

    /// Resolve the chart element at a pointer position using the same layout
    /// the renderer draws with.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HoverTarget> {
        match &self.spec {
            Some(ChartSpec::Donut(chart)) => {
                let ring = layout::ring_geometry(self.viewport_w, self.viewport_h);
                hit::hit_donut(chart, ring, x, y)
            }
            Some(ChartSpec::StackedBar(chart)) => {
                let plot = layout::bar_plot_area(self.viewport_w, self.viewport_h);
                let ticks = layout::y_axis_ticks(chart.max_stack_total());
                let y_max = ticks.last().copied().unwrap_or(0.0);
                hit::hit_bars(&layout::bar_segments(chart, plot, y_max), x, y)
            }
            None => None,
        }
    }
}

/// The full chart engine: a core plus the canvas it owns.
pub struct ChartEngine {
    canvas: HtmlCanvasElement,
    core: ChartCore,
}

impl ChartEngine {
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: ChartCore::new() }
    }

    #[must_use]
    pub fn core(&self) -> &ChartCore {
        &self.core
    }

    pub fn set_spec(&mut self, spec: ChartSpec) {
        self.core.set_spec(spec);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Forward a pointer position in canvas CSS coordinates. Returns true
    /// when the chart needs a redraw.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.core.pointer_moved(x, y)
    }

    pub fn pointer_left(&mut self) -> bool {
        self.core.pointer_left()
    }

    /// Size the backing store to the canvas CSS size and draw the current
    /// chart, or blank the surface when no chart is set.
    ///
    /// # Errors
    /// Returns `Err` when the 2d context is unavailable or a canvas call
    /// fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.sync_viewport();
        let ctx = context_2d(&self.canvas)?;
        render::draw(&ctx, &self.core)
    }

    /// Match the backing store to the CSS box at the device pixel ratio, so
    /// drawing stays sharp on high-density displays.
    fn sync_viewport(&mut self) {
        let dpr = web_sys::window().map_or(1.0, |window| window.device_pixel_ratio());
        let css_w = f64::from(self.canvas.client_width());
        let css_h = f64::from(self.canvas.client_height());
        let device_w = (css_w * dpr).round().max(1.0) as u32;
        let device_h = (css_h * dpr).round().max(1.0) as u32;
        if self.canvas.width() != device_w {
            self.canvas.set_width(device_w);
        }
        if self.canvas.height() != device_h {
            self.canvas.set_height(device_h);
        }
        self.core.set_viewport(css_w, css_h, dpr);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?;
    ctx.dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected canvas context type"))
}
