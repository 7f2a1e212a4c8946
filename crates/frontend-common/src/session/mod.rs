//! Session state shared across independently mounted page regions.
//!
//! The static marketing region must stay free of client state, so the
//! session flag lives in a module-level store rather than a context provider
//! threaded through the whole component tree. Regions that care subscribe;
//! regions that do not never touch it.

pub mod hook;
pub mod seed;
pub mod store;

pub use hook::{UseSessionHandle, use_session};
pub use seed::{SessionSeed, parse_session_seed};
pub use store::{
    SessionStore, SubscriberId, auth_state, init_auth_state, set_authenticated, subscribe,
    subscriber_count, unsubscribe,
};
