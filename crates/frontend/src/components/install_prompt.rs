//! Deferred install-prompt widget.
//!
//! The widget ships outside the main bundle and is only fetched on user
//! intent. The fetch goes through the allowlist gate; once the bundle is
//! evaluated it wires up its own UI, so this component's job ends at
//! getting it loaded.

use parlor_frontend_common::bundles::{OptionalBundle, safe_load};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::DynamicImportLoader;

/// Fetch state for the optional bundle.
#[derive(Clone, Debug, PartialEq)]
enum PromptState {
    Idle,
    Fetching,
    Ready,
    Unavailable,
}

#[function_component(InstallPrompt)]
pub fn install_prompt() -> Html {
    let state = use_state(|| PromptState::Idle);

    let on_request = {
        let state = state.clone();
        Callback::from(move |_| {
            if *state != PromptState::Idle {
                return;
            }
            state.set(PromptState::Fetching);
            let state = state.clone();
            spawn_local(async move {
                let loader = DynamicImportLoader::new();
                match safe_load(&loader, OptionalBundle::PwaInstallPrompt.path()).await {
                    Ok(_module) => state.set(PromptState::Ready),
                    Err(err) => {
                        gloo::console::error!("install prompt unavailable:", err.to_string());
                        state.set(PromptState::Unavailable);
                    }
                }
            });
        })
    };

    match *state {
        PromptState::Idle => html! {
            <div class="fixed bottom-6 left-6">
                <button onclick={on_request}
                    class="px-4 py-2 text-sm rounded-lg border border-gray-300 dark:border-gray-600 text-gray-700 dark:text-gray-300 hover:border-blue-400 transition-colors">
                    { "Get the app" }
                </button>
            </div>
        },
        PromptState::Fetching => html! {
            <div class="fixed bottom-6 left-6">
                <button disabled=true
                    class="px-4 py-2 text-sm rounded-lg border border-gray-200 dark:border-gray-700 text-gray-400">
                    { "Preparing…" }
                </button>
            </div>
        },
        // The bundle renders its own prompt from here on.
        PromptState::Ready | PromptState::Unavailable => html! {},
    }
}
