//! Observable session flag with subscriber-based propagation.
//!
//! One store instance exists per page load. Mutation goes through
//! [`set_authenticated`] (or [`init_auth_state`], which the root boundary
//! calls once with the server-determined value); every registered subscriber
//! is invoked synchronously, in registration order, before the mutating call
//! returns.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::config::SessionConfig;

/// Token identifying one subscription, returned by [`subscribe`].
///
/// Two activations of the same component hold two distinct tokens, so
/// removing one never disturbs the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Rc<dyn Fn(bool)>;

/// Observable boolean with synchronous, registration-ordered notification.
///
/// Constructible as a plain value; the page-wide instance lives in a
/// `thread_local!` below and is reached through the module-level functions.
pub struct SessionStore {
    authenticated: Cell<bool>,
    subscribers: RefCell<Vec<(SubscriberId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl SessionStore {
    /// Create a store holding `initial` with no subscribers.
    pub fn new(initial: bool) -> Self {
        Self {
            authenticated: Cell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Current value. Registers nothing; callable at any time.
    pub fn get(&self) -> bool {
        self.authenticated.get()
    }

    /// Assign `value` and notify every subscriber registered at this moment,
    /// in registration order.
    ///
    /// There is no equal-value suppression: setting the current value again
    /// still notifies everyone. The subscriber list is snapshotted before
    /// any callback runs, so callbacks may read, subscribe, or unsubscribe
    /// without touching an active borrow; (un)registrations made inside a
    /// callback take effect from the next cycle onward.
    pub fn set(&self, value: bool) {
        self.authenticated.set(value);
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        debug!(
            authenticated = value,
            subscribers = snapshot.len(),
            "session flag updated"
        );
        for callback in snapshot {
            callback(value);
        }
    }

    /// Register `callback` for all future updates and return its token.
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove the subscription identified by `id`.
    ///
    /// Removing a token that was never issued, or one already removed, is a
    /// no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers
            .borrow_mut()
            .retain(|(entry_id, _)| *entry_id != id);
    }

    /// Number of live subscriptions. Zero whenever no consumer is mounted.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

thread_local! {
    /// Page-wide store instance. The UI runs on a single thread, so a
    /// thread-local plus interior mutability is the whole synchronization
    /// story.
    static SESSION_STORE: SessionStore = SessionStore::new(SessionConfig::DEFAULT_AUTHENTICATED);
}

/// Assign the session flag and synchronously notify all subscribers.
pub fn set_authenticated(value: bool) {
    SESSION_STORE.with(|store| store.set(value));
}

/// Current session flag, without subscribing.
pub fn auth_state() -> bool {
    SESSION_STORE.with(SessionStore::get)
}

/// Seed the store with the server-determined flag.
///
/// Invoked once per page load by the root boundary, right after hydration.
/// The store itself enforces no first-call-only rule; a second call behaves
/// exactly like [`set_authenticated`].
pub fn init_auth_state(value: bool) {
    set_authenticated(value);
}

/// Register `callback` against the page-wide store.
pub fn subscribe(callback: impl Fn(bool) + 'static) -> SubscriberId {
    SESSION_STORE.with(|store| store.subscribe(callback))
}

/// Remove one subscription from the page-wide store.
pub fn unsubscribe(id: SubscriberId) {
    SESSION_STORE.with(|store| store.unsubscribe(id));
}

/// Live subscription count on the page-wide store.
pub fn subscriber_count() -> usize {
    SESSION_STORE.with(SessionStore::subscriber_count)
}
