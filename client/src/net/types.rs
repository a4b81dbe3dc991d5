//! Wire schema for the query service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reply shape is owned by the server and changes ahead of the client,
//! so every field is optional and unknown fields are ignored. Payload drift
//! degrades rendering instead of failing deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Body of `POST /query`.
#[derive(Clone, Debug, Serialize)]
pub struct QueryRequest {
    /// The user's natural-language question.
    pub question: String,
    /// Simulation run to scope the question to, omitted when none is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_id: Option<String>,
}

/// Reply from `POST /query`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ChatResponse {
    /// Reply class: `greeting`, `acknowledgment`, or absent for answers.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Bubble text for greeting replies.
    #[serde(default)]
    pub message: Option<String>,
    /// Bubble text for every other reply.
    #[serde(default)]
    pub answer: Option<String>,
    /// Raw chart payload, shaped per `visualization_type`.
    #[serde(default)]
    pub chart_data: Option<Value>,
    /// Which chart to draw from `chart_data`.
    #[serde(default)]
    pub visualization_type: Option<String>,
    /// Data route the server consulted for the chart. Logged, never rendered.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// The server's routing rationale. Logged, never rendered.
    #[serde(default)]
    pub agentic_decision: Option<Value>,
}
