//! Bridge component between Leptos state and the imperative `charts` engine.
//!
//! ARCHITECTURE
//! ============
//! The charts crate owns canvas drawing while this host maps chart state
//! changes into engine operations and forwards pointer events for tooltips.

use leptos::prelude::*;

use crate::state::chart::ChartState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use charts::engine::ChartEngine;

/// Chart host component.
///
/// On hydration, this mounts `charts::engine::ChartEngine` on the panel
/// canvas, syncs it to the prescribed chart, and re-renders on changes.
#[component]
pub fn ChartPanel() -> impl IntoView {
    let chart = expect_context::<RwSignal<ChartState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<ChartEngine>));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let state = chart.get();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_none() {
                *engine.borrow_mut() = Some(ChartEngine::new(canvas));
            }
            // The hidden-class binding flips earlier in the same tick, so the
            // canvas already has its on-screen size when the engine measures it.
            if let Some(engine) = engine.borrow_mut().as_mut() {
                match state.spec {
                    Some(spec) => engine.set_spec(spec),
                    None => engine.clear(),
                }
                let _ = engine.render();
            }
        });
    }

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let moved =
                        engine.pointer_moved(f64::from(ev.offset_x()), f64::from(ev.offset_y()));
                    if moved {
                        let _ = engine.render();
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    if engine.pointer_left() {
                        let _ = engine.render();
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <section class="chart-panel" class:chart-panel--hidden=move || !chart.get().visible()>
            <canvas
                class="chart-panel__canvas"
                node_ref=canvas_ref
                on:pointermove=on_pointer_move
                on:pointerleave=on_pointer_leave
            >
                "Your browser does not support the canvas element."
            </canvas>
        </section>
    }
}
