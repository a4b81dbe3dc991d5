//! Shared page state, provided as Leptos contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` holds the conversation and the in-flight flag; `chart` holds the
//! one chart the conversation currently prescribes. Components read and
//! mutate both through `RwSignal` contexts the app shell provides.

pub mod chart;
pub mod chat;
