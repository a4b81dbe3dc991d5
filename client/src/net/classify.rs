//! Reply classification: reduce a server reply to render instructions.

use serde_json::Value;

use super::types::ChatResponse;

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

/// What the chart panel does after a reply.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartAction {
    /// Leave whatever chart is showing untouched.
    Keep,
    /// Hide and drop the current chart.
    Clear,
    /// Replace the current chart with this prescription.
    Show {
        visualization_type: String,
        data: Value,
    },
}

/// A reply reduced to exactly what the page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseAction {
    /// Text for the assistant bubble.
    pub text: String,
    pub chart: ChartAction,
}

/// Classify a reply by its `type` tag.
///
/// Greetings render `message` and leave any showing chart alone.
/// Acknowledgments render `answer` and always clear the chart. Everything
/// else renders `answer` and shows a chart only when the reply carries both
/// a payload and a chart kind.
#[must_use]
pub fn classify(response: &ChatResponse) -> ResponseAction {
    match response.kind.as_deref() {
        Some("greeting") => ResponseAction {
            text: response.message.clone().unwrap_or_default(),
            chart: ChartAction::Keep,
        },
        Some("acknowledgment") => ResponseAction {
            text: response.answer.clone().unwrap_or_default(),
            chart: ChartAction::Clear,
        },
        _ => {
            let chart = match (&response.chart_data, &response.visualization_type) {
                (Some(data), Some(kind)) => ChartAction::Show {
                    visualization_type: kind.clone(),
                    data: data.clone(),
                },
                _ => ChartAction::Clear,
            };
            ResponseAction {
                text: response.answer.clone().unwrap_or_default(),
                chart,
            }
        }
    }
}
