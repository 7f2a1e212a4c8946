//! Yew adapter over the session store.

use yew::prelude::*;

use super::store;

/// Handle returned by [`use_session`].
#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    is_authenticated: UseStateHandle<bool>,
}

impl UseSessionHandle {
    /// Session flag as of the latest render.
    pub fn is_authenticated(&self) -> bool {
        *self.is_authenticated
    }

    /// Mark the session authenticated.
    pub fn login(&self) {
        store::set_authenticated(true);
    }

    /// Mark the session unauthenticated.
    pub fn logout(&self) {
        store::set_authenticated(false);
    }
}

/// Subscribe the calling component to the session flag.
///
/// On mount, the current value is snapshotted into local state and a fresh
/// forwarding closure is registered, one per activation, so two mounted
/// instances of the same component track the store independently. The
/// cleanup removes exactly that closure by its token; after unmount no
/// further store update reaches this component.
#[hook]
pub fn use_session() -> UseSessionHandle {
    let is_authenticated = use_state(store::auth_state);

    {
        let is_authenticated = is_authenticated.clone();
        use_effect_with((), move |_| {
            let id = store::subscribe(move |value| is_authenticated.set(value));
            move || store::unsubscribe(id)
        });
    }

    UseSessionHandle { is_authenticated }
}
