//! Browser client for Demandboard: a chat UI over the demand query service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app renders a conversation panel and a canvas chart panel side by
//! side. Questions go to the query service over HTTP; replies carry answer
//! text plus an optional chart prescription that the `charts` crate renders.
//!
//! The crate compiles for two targets. The browser build (feature `hydrate`)
//! wires networking and the canvas engine; the native build compiles the
//! same modules without DOM access so the pure logic runs under `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
