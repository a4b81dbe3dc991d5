//! Conversation panel for asking demand questions and reading replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the turn history from shared chat state and hands submitted
//! questions to the page via a callback. Assistant replies render as
//! sanitized markdown; user turns and error banners render as plain text.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::chat::{ChatState, Sender};

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

/// Prompts offered before the first turn lands.
const EXAMPLE_QUESTIONS: [&str; 3] = [
    "What is my total demand?",
    "Show me my overdue orders",
    "How many months do I have firm demand?",
];

/// Chat panel showing conversation history and a question input.
#[component]
pub fn ChatPanel(on_submit: Callback<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Keep the newest turn in view as the conversation grows.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.turns.len();
        let _ = state.loading;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Hand focus back to the input whenever a request finishes.
    Effect::new(move || {
        let loading = chat.get().loading;
        if !loading {
            #[cfg(feature = "hydrate")]
            {
                if let Some(input_el) = input_ref.get() {
                    let _ = input_el.focus();
                }
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || chat.get().loading {
            return;
        }

        let question = text.trim().to_owned();
        input.set(String::new());
        on_submit.run(question);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().loading;

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let state = chat.get();
                    if state.show_welcome() {
                        return view! {
                            <div class="chat-panel__welcome">
                                <p class="chat-panel__welcome-lead">
                                    "Ask a question about your demand plan, or try one of these:"
                                </p>
                                <div class="chat-panel__examples">
                                    {EXAMPLE_QUESTIONS
                                        .iter()
                                        .map(|question| {
                                            view! {
                                                <button
                                                    class="chat-panel__example"
                                                    on:click=move |_| {
                                                        input.set((*question).to_owned());
                                                        do_send();
                                                    }
                                                >
                                                    {*question}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                            .into_any();
                    }

                    state
                        .turns
                        .iter()
                        .map(|turn| {
                            let is_user = turn.sender == Sender::User;
                            let is_error = turn.is_error;
                            let is_markdown = !is_user && !is_error;
                            let text = turn.text.clone();
                            let caption = clock_label(turn.timestamp);

                            view! {
                                <div
                                    class="chat-panel__turn"
                                    class:chat-panel__turn--user=is_user
                                    class:chat-panel__turn--error=is_error
                                >
                                    <div class="chat-panel__bubble" class:chat-panel__markdown=is_markdown>
                                        {if is_markdown {
                                            let rendered = render_markdown_html(&text);
                                            view! {
                                                <div class="chat-panel__markdown-body" inner_html=rendered></div>
                                            }
                                                .into_any()
                                        } else {
                                            view! { <span>{text}</span> }.into_any()
                                        }}
                                    </div>
                                    <span class="chat-panel__caption">{caption}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    chat.get()
                        .loading
                        .then(|| view! { <div class="chat-panel__loading">"Thinking..."</div> })
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about your demand data..."
                    node_ref=input_ref
                    disabled=move || chat.get().loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Wall-clock caption for a turn, formatted by the browser locale.
fn clock_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        date.to_locale_time_string("en-US").into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp_ms;
        String::new()
    }
}

fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
