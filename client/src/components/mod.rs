//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_panel` renders the conversation and submits questions; `chart_panel`
//! owns the canvas and keeps its chart engine in sync with shared state.

pub mod chart_panel;
pub mod chat_panel;
