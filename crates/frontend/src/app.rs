//! Page shell composing the independently rendered regions.

use yew::prelude::*;

use crate::boundary::SessionBoundary;
use crate::components::{ChatPanel, InstallPrompt, MemberArea, StaticRegion};

/// Root of the page. Every region mounts in parallel under the session
/// boundary; none of them knows about the others.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionBoundary>
            <div class="min-h-screen bg-white dark:bg-gray-900">
                <StaticRegion />
                <MemberArea />
                <InstallPrompt />
                <ChatPanel />
            </div>
        </SessionBoundary>
    }
}
