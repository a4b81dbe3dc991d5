//! Page-level route components.

pub mod chat;
