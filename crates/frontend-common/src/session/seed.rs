//! Server-emitted session seed.
//!
//! The server knows whether the request carried a valid session and embeds
//! that single fact in the page shell. The root boundary reads it back out
//! after hydration and seeds the store with it.

use serde::Deserialize;
use tracing::warn;

use crate::config::SessionConfig;

/// Payload of the seed element the server renders into the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionSeed {
    pub authenticated: bool,
}

/// Parse the seed payload text, if the element was present at all.
///
/// An absent or malformed seed degrades to signed-out; a broken shell must
/// not take the page down.
pub fn parse_session_seed(raw: Option<&str>) -> bool {
    match raw {
        Some(text) => match serde_json::from_str::<SessionSeed>(text) {
            Ok(seed) => seed.authenticated,
            Err(err) => {
                warn!(%err, "malformed session seed, assuming signed-out");
                SessionConfig::DEFAULT_AUTHENTICATED
            }
        },
        None => SessionConfig::DEFAULT_AUTHENTICATED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_authenticated_seed() {
        assert!(parse_session_seed(Some(r#"{"authenticated":true}"#)));
        assert!(!parse_session_seed(Some(r#"{"authenticated":false}"#)));
    }

    #[test]
    fn tolerates_extra_fields() {
        assert!(parse_session_seed(Some(
            r#"{"authenticated":true,"issued_at":1722855600}"#
        )));
    }

    #[test]
    fn missing_element_reads_signed_out() {
        assert!(!parse_session_seed(None));
    }

    #[test]
    fn malformed_payload_reads_signed_out() {
        assert!(!parse_session_seed(Some("")));
        assert!(!parse_session_seed(Some("not json")));
        assert!(!parse_session_seed(Some(r#"{"authenticated":"yes"}"#)));
    }
}
