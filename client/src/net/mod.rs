//! Networking modules for the demand query service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and
//! `classify` reduces a reply to the text and chart action the page renders.

pub mod api;
pub mod classify;
pub mod types;
