//! Chart panel state: the chart the conversation currently prescribes.
//!
//! DESIGN
//! ======
//! Holds the normalized [`ChartSpec`] rather than the raw payload so
//! replacement is atomic: showing a new chart drops the previous model here,
//! and the panel syncs its single engine to whatever this holds. There is
//! no path that leaves two live charts behind.

use charts::engine::ChartSpec;

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// State shared through a reactive context. `None` means the panel is hidden.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartState {
    pub spec: Option<ChartSpec>,
}

impl ChartState {
    /// Replace the current chart.
    pub fn show(&mut self, spec: ChartSpec) {
        self.spec = Some(spec);
    }

    /// Hide the panel and drop the current chart.
    pub fn clear(&mut self) {
        self.spec = None;
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.spec.is_some()
    }
}
