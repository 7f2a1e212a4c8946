//! Allowlist-gated loading of optional UI bundles.
//!
//! Optional widgets ship outside the main bundle and are fetched on demand.
//! A runtime-constructed import path is an injection vector, so every load
//! is checked against a compile-time allowlist before the loader is ever
//! invoked.

mod allowlist;
mod loader;

pub use allowlist::{ALLOWED_BUNDLES, OptionalBundle, validate};
pub use loader::{BundleLoader, safe_load};
