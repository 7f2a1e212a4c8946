//! Frontend configuration

/// Session bootstrap configuration
pub struct SessionConfig;

impl SessionConfig {
    /// DOM id of the seed element the server renders into the page shell
    pub const SEED_ELEMENT_ID: &'static str = "session-seed";

    /// Session flag value before any seed or update has been applied
    pub const DEFAULT_AUTHENTICATED: bool = false;
}
