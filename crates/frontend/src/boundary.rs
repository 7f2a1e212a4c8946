//! Root client boundary that seeds the session store.
//!
//! The server evaluates the session cookie and renders the resulting flag
//! into the page shell; this component reads it back out once after
//! hydration and hands it to the store. Nothing below the boundary has to
//! know where the initial value came from.

use parlor_frontend_common::SessionConfig;
use parlor_frontend_common::session::{init_auth_state, parse_session_seed};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SessionBoundaryProps {
    pub children: Children,
}

/// Mounted exactly once, above every region that may consult the session.
#[function_component(SessionBoundary)]
pub fn session_boundary(props: &SessionBoundaryProps) -> Html {
    use_effect_with((), |_| {
        init_auth_state(parse_session_seed(read_seed_text().as_deref()));
    });

    html! { <>{ props.children.clone() }</> }
}

/// Text content of the seed element the server rendered into the shell.
fn read_seed_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(SessionConfig::SEED_ELEMENT_ID)?;
    element.text_content()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::read_seed_text;

    #[wasm_bindgen_test]
    fn seed_text_is_absent_without_the_shell_element() {
        assert_eq!(read_seed_text(), None);
    }
}
