//! Shared client-state machinery for the Parlor front end.
//!
//! The page is composed of independently mounted regions: a static marketing
//! region, a chat entry point, and a members-only region. The modules here
//! are what those regions share: the session flag they must agree on, and
//! the gated loader for optional UI bundles.

pub mod bundles;
pub mod config;
pub mod error;
pub mod session;

pub use bundles::{ALLOWED_BUNDLES, BundleLoader, OptionalBundle, safe_load, validate};
pub use config::SessionConfig;
pub use error::ImportError;
pub use session::{UseSessionHandle, use_session};
