//! Compile-time allowlist of deferred-load targets.

const PWA_INSTALL_PROMPT: &str = "@/components/pwa-install-prompt";

/// Module paths permitted as deferred-load targets. Fixed at build time and
/// never derived from runtime input.
pub const ALLOWED_BUNDLES: &[&str] = &[PWA_INSTALL_PROMPT];

/// The optional UI bundles this product knows how to load.
///
/// Each variant maps one allowlisted path to an already-linked load target,
/// so no runtime string ever reaches the loader itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionalBundle {
    /// Install-prompt widget offered to returning visitors.
    PwaInstallPrompt,
}

impl OptionalBundle {
    /// Module path the host page serves this bundle under.
    pub const fn path(self) -> &'static str {
        match self {
            Self::PwaInstallPrompt => PWA_INSTALL_PROMPT,
        }
    }

    /// Resolve a requested path by exact, case-sensitive match.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            PWA_INSTALL_PROMPT => Some(Self::PwaInstallPrompt),
            _ => None,
        }
    }
}

/// True iff `path` is an exact member of [`ALLOWED_BUNDLES`].
///
/// No prefix, glob, or partial matching.
pub fn validate(path: &str) -> bool {
    OptionalBundle::from_path(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlisted_path_validates() {
        assert!(validate("@/components/pwa-install-prompt"));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert!(!validate("@/components/anything-else"));
        assert!(!validate(""));
    }

    #[test]
    fn matching_is_exact() {
        assert!(!validate("@/components/pwa-install-prompt/index"));
        assert!(!validate("@/components/pwa-install-promp"));
        assert!(!validate(" @/components/pwa-install-prompt"));
        assert!(!validate("@/Components/pwa-install-prompt"));
    }

    #[test]
    fn every_allowlist_entry_resolves_to_a_bundle() {
        for path in ALLOWED_BUNDLES {
            let bundle = OptionalBundle::from_path(path).expect("allowlist entry must resolve");
            assert_eq!(bundle.path(), *path);
        }
    }
}
