//! Members-only region.
//!
//! The one slot whose entire markup depends on the session flag: a sign-in
//! prompt for visitors, the workspace entry points for members.

use parlor_frontend_common::use_session;
use yew::prelude::*;

#[function_component(MemberArea)]
pub fn member_area() -> Html {
    let session = use_session();

    if !session.is_authenticated() {
        let on_sign_in = {
            let session = session.clone();
            Callback::from(move |_| session.login())
        };
        return html! {
            <section class="max-w-4xl mx-auto px-6 py-12 text-center">
                <div class="p-8 rounded-lg border border-dashed border-gray-300 dark:border-gray-600">
                    <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100">
                        { "Already using Parlor?" }
                    </h2>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">
                        { "Sign in to manage your widgets and review conversations." }
                    </p>
                    <button onclick={on_sign_in}
                        class="mt-4 px-6 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg transition-colors">
                        { "Sign in" }
                    </button>
                </div>
            </section>
        };
    }

    let on_sign_out = {
        let session = session.clone();
        Callback::from(move |_| session.logout())
    };

    html! {
        <section class="max-w-4xl mx-auto px-6 py-12">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100">
                    { "Your workspace" }
                </h2>
                <button onclick={on_sign_out}
                    class="text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100 transition-colors">
                    { "Sign out" }
                </button>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                <a href="/widgets" class="p-6 rounded-lg border border-gray-200 dark:border-gray-700 hover:border-blue-400 transition-colors">
                    <h3 class="font-medium text-gray-900 dark:text-gray-100">{ "Widgets" }</h3>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        { "Configure the chat widgets installed on your sites." }
                    </p>
                </a>
                <a href="/conversations" class="p-6 rounded-lg border border-gray-200 dark:border-gray-700 hover:border-blue-400 transition-colors">
                    <h3 class="font-medium text-gray-900 dark:text-gray-100">{ "Conversations" }</h3>
                    <p class="mt-1 text-sm text-gray-600 dark:text-gray-400">
                        { "Review what visitors asked this week." }
                    </p>
                </a>
            </div>
        </section>
    }
}
