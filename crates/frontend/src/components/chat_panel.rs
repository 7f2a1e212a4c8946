//! Chat entry point.
//!
//! A floating launcher that expands into the concierge panel. Message
//! transport is handled elsewhere; this slot owns the panel chrome and the
//! session-dependent affordances around it.

use parlor_frontend_common::session::auth_state;
use parlor_frontend_common::use_session;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
struct ChatLine {
    from_visitor: bool,
    text: String,
}

#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let open = use_state(|| false);
    let draft = use_state(String::new);
    let lines = use_state(Vec::<ChatLine>::new);
    let session = use_session();

    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let on_draft_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_send = {
        let draft = draft.clone();
        let lines = lines.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.is_empty() {
                return;
            }
            let mut next = (*lines).clone();
            next.push(ChatLine {
                from_visitor: true,
                text: (*draft).clone(),
            });
            // One-shot read; no subscription needed inside an event handler.
            let reply = if auth_state() {
                "Thanks! This conversation is saved to your account."
            } else {
                "Thanks! You're chatting as a guest, so this conversation won't be kept."
            };
            next.push(ChatLine {
                from_visitor: false,
                text: reply.to_string(),
            });
            lines.set(next);
            draft.set(String::new());
        })
    };

    if !*open {
        return html! {
            <button onclick={toggle_open}
                class="fixed bottom-6 right-6 w-14 h-14 rounded-full bg-blue-600 hover:bg-blue-700 text-white shadow-lg transition-colors"
                aria-label="Open chat">
                { "💬" }
            </button>
        };
    }

    let status = if session.is_authenticated() {
        html! {
            <span class="text-xs text-green-600 dark:text-green-400">{ "Signed in" }</span>
        }
    } else {
        let on_sign_in = {
            let session = session.clone();
            Callback::from(move |_| session.login())
        };
        html! {
            <button onclick={on_sign_in}
                class="text-xs text-blue-600 dark:text-blue-400 hover:underline">
                { "Sign in to keep your history" }
            </button>
        }
    };

    html! {
        <div class="fixed bottom-6 right-6 w-80 rounded-lg shadow-xl bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 flex flex-col">
            <div class="p-3 border-b border-gray-200 dark:border-gray-700 flex justify-between items-center">
                <div class="flex flex-col">
                    <span class="font-medium text-gray-900 dark:text-gray-100">{ "Parlor" }</span>
                    { status }
                </div>
                <button onclick={toggle_open}
                    class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                    aria-label="Close chat">
                    { "✕" }
                </button>
            </div>
            <div class="p-3 h-64 overflow-y-auto space-y-2">
                { for lines.iter().map(|line| {
                    let bubble = if line.from_visitor {
                        "ml-8 bg-blue-600 text-white"
                    } else {
                        "mr-8 bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-gray-100"
                    };
                    html! {
                        <p class={format!("px-3 py-2 rounded-lg text-sm {bubble}")}>
                            { &line.text }
                        </p>
                    }
                }) }
            </div>
            <form onsubmit={on_send} class="p-3 border-t border-gray-200 dark:border-gray-700 flex gap-2">
                <input type="text"
                    value={(*draft).clone()}
                    oninput={on_draft_input}
                    placeholder="Ask us anything"
                    class="flex-1 px-3 py-2 text-sm rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100" />
                <button type="submit"
                    class="px-4 py-2 text-sm bg-blue-600 hover:bg-blue-700 text-white rounded-lg transition-colors">
                    { "Send" }
                </button>
            </form>
        </div>
    }
}
