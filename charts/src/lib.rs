//! Chart engine for the demand chat client.
//!
//! The server decides *whether* a reply gets a visualization and which kind;
//! this crate owns everything after that decision: reading the loosely-typed
//! JSON payload, normalizing it into a fixed chart model, laying the model out
//! in canvas coordinates, hit-testing pointer positions for hover tooltips,
//! and drawing to the 2d context. Normalization and layout are pure and run
//! on any target; only [`engine::ChartEngine`] and [`render`] touch the DOM.
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Chart lifecycle: the canvas-owning engine and its testable core |
//! | [`data`] | Loose JSON readers and recognized visualization kinds |
//! | [`donut`] | Donut chart normalization and label text |
//! | [`stacked`] | Stacked-bar chart normalization and label text |
//! | [`format`] | Number grouping, percentages, period labels |
//! | [`palette`] | Category and series colors |
//! | [`layout`] | Plot geometry: ring placement, bar rectangles, axis ticks |
//! | [`hit`] | Pointer hit-testing for hover targets |
//! | [`render`] | Drawing to the 2d context |

pub mod data;
pub mod donut;
pub mod engine;
pub mod format;
pub mod hit;
pub mod layout;
pub mod palette;
pub mod render;
pub mod stacked;
