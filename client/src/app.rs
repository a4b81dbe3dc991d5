//! Application shell: shared state contexts, router, and page head.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::pages::chat::ChatPage;
use crate::state::chart::ChartState;
use crate::state::chat::ChatState;

/// Root component. Provides the conversation and chart contexts every
/// component reads, then mounts the single chat route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(ChatState::default()));
    provide_context(RwSignal::new(ChartState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/demandboard.css"/>
        <Title text="Demandboard"/>

        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
