//! Static marketing region.
//!
//! Renders from constants only. This slot must stay crawlable and usable
//! without any client state, so it imports nothing from the session
//! modules. That one rule keeps the marketing pages independent of the
//! rest of the app.

use yew::prelude::*;

const HEADLINE: &str = "Every visitor greeted. Every question answered.";
const SUBHEAD: &str =
    "Parlor puts a concierge chat on your site that your whole team can stand behind.";

const FEATURES: &[(&str, &str)] = &[
    (
        "Answers on brand",
        "Responses draw only on the pages and docs you publish.",
    ),
    (
        "Hand-off when it matters",
        "Conversations route to a human the moment one is needed.",
    ),
    (
        "Nothing to install",
        "One script tag on your site; we take it from there.",
    ),
];

#[function_component(StaticRegion)]
pub fn static_region() -> Html {
    html! {
        <section class="max-w-4xl mx-auto px-6 pt-20 pb-12 text-center">
            <h1 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                { HEADLINE }
            </h1>
            <p class="mt-4 text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                { SUBHEAD }
            </p>
            <div class="mt-12 grid gap-6 md:grid-cols-3 text-left">
                { for FEATURES.iter().map(|(title, body)| html! {
                    <div class="p-6 rounded-lg border border-gray-200 dark:border-gray-700 bg-gray-50 dark:bg-gray-800">
                        <h3 class="font-semibold text-gray-900 dark:text-gray-100">{ *title }</h3>
                        <p class="mt-2 text-sm text-gray-600 dark:text-gray-400">{ *body }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
