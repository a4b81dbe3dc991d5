//! The chat page: drives the ask, answer, render cycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the conversation flow. Submission gates on the loading
//! flag so one query is in flight at a time; each reply is classified into
//! bubble text plus a chart action, and chart state only ever holds the
//! latest prescribed chart.

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use charts::engine::ChartSpec;

use crate::components::chart_panel::ChartPanel;
use crate::components::chat_panel::ChatPanel;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::classify::{ChartAction, classify};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ChatResponse;
use crate::net::types::QueryRequest;
use crate::state::chart::ChartState;
use crate::state::chat::{ChatState, ConversationTurn};

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Banner text when the startup health probe cannot reach the service.
#[cfg(any(test, feature = "hydrate"))]
const HEALTH_ERROR_TEXT: &str =
    "Cannot connect to server. Make sure the local server is running on port 5001.";

/// Bubble prefix for failed queries.
#[cfg(any(test, feature = "hydrate"))]
const QUERY_ERROR_PREFIX: &str = "Sorry, I encountered an error: ";

/// Chat page pairing the conversation panel with the chart panel.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let chart = expect_context::<RwSignal<ChartState>>();

    // Probe the service once on mount. Failure is a banner, not a blocker.
    let probed = RwSignal::new(false);
    Effect::new(move || {
        if probed.get() {
            return;
        }
        probed.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::check_health().await {
                Ok(body) => leptos::logging::log!("query service healthy: {body}"),
                Err(message) => {
                    leptos::logging::error!("query service unreachable: {message}");
                    chat.update(|state| {
                        state
                            .turns
                            .push(ConversationTurn::error(HEALTH_ERROR_TEXT.to_owned(), now_ms()));
                    });
                }
            }
        });
    });

    let on_submit = Callback::new(move |question: String| {
        if chat.get_untracked().loading {
            return;
        }

        let request = QueryRequest {
            question: question.clone(),
            simulation_id: chat.get_untracked().simulation_id.clone(),
        };
        chat.update(|state| {
            state.turns.push(ConversationTurn::user(question, now_ms()));
            state.loading = true;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::post_query(&request).await {
                Ok(response) => apply_response(chat, chart, &response),
                Err(message) => chat.update(|state| {
                    state.turns.push(ConversationTurn::error(
                        format!("{QUERY_ERROR_PREFIX}{message}"),
                        now_ms(),
                    ));
                }),
            }
            chat.update(|state| state.loading = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (chart, request);
            chat.update(|state| state.loading = false);
        }
    });

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"Demandboard"</h1>
                <p class="chat-page__subtitle">"Ask questions about your factory demand"</p>
            </header>
            <main class="chat-page__layout">
                <ChatPanel on_submit=on_submit/>
                <ChartPanel/>
            </main>
        </div>
    }
}

/// Apply a classified reply: append the assistant turn, then show, keep, or
/// clear the chart.
#[cfg(any(test, feature = "hydrate"))]
fn apply_response(chat: RwSignal<ChatState>, chart: RwSignal<ChartState>, response: &ChatResponse) {
    let action = classify(response);
    chat.update(|state| {
        state
            .turns
            .push(ConversationTurn::assistant(action.text, now_ms()));
    });

    match action.chart {
        ChartAction::Keep => {}
        ChartAction::Clear => chart.update(ChartState::clear),
        ChartAction::Show {
            visualization_type,
            data,
        } => {
            if let Some(decision) = &response.agentic_decision {
                leptos::logging::log!("agentic decision: {decision}");
            }
            if let Some(endpoint) = &response.endpoint {
                leptos::logging::log!("chart data endpoint: {endpoint}");
            }
            match ChartSpec::from_parts(&visualization_type, &data) {
                Some(spec) => chart.update(|state| state.show(spec)),
                None => {
                    leptos::logging::warn!("unrecognized visualization type: {visualization_type}");
                    chart.update(ChartState::clear);
                }
            }
        }
    }
}

/// Milliseconds since the Unix epoch; zero outside the browser.
fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
