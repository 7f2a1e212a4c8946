//! Deferred loading behind the allowlist gate.

use async_trait::async_trait;
use tracing::warn;

use super::allowlist::OptionalBundle;
use crate::error::ImportError;

/// The underlying deferred-module-loading primitive.
///
/// Implementations own the actual fetch (and its cancellation semantics).
/// They are handed an [`OptionalBundle`], never a raw string, so the only
/// reachable targets are the ones linked in at build time.
#[async_trait(?Send)]
pub trait BundleLoader {
    /// Loader-defined representation of a fetched module.
    type Module;

    /// Fetch one optional bundle.
    async fn load(&self, bundle: OptionalBundle) -> Result<Self::Module, ImportError>;
}

/// Validate `path` against the allowlist, then delegate to `loader`.
///
/// A rejected path never reaches the loader; the returned
/// [`ImportError::UnauthorizedImport`] carries the offending path so a
/// misconfigured or malicious import surfaces immediately during
/// development. On success the loader's result is returned unchanged.
pub async fn safe_load<L: BundleLoader>(loader: &L, path: &str) -> Result<L::Module, ImportError> {
    match OptionalBundle::from_path(path) {
        Some(bundle) => loader.load(bundle).await,
        None => {
            warn!(path, "rejected import of non-allowlisted bundle");
            Err(ImportError::unauthorized(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use tokio_test::block_on;

    use super::*;

    /// Loader double that records which bundles it was asked for.
    struct RecordingLoader {
        requests: Rc<RefCell<Vec<OptionalBundle>>>,
        fail_with: Cell<Option<ImportError>>,
    }

    impl RecordingLoader {
        fn new() -> Self {
            Self {
                requests: Rc::new(RefCell::new(Vec::new())),
                fail_with: Cell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl BundleLoader for RecordingLoader {
        type Module = &'static str;

        async fn load(&self, bundle: OptionalBundle) -> Result<Self::Module, ImportError> {
            self.requests.borrow_mut().push(bundle);
            match self.fail_with.take() {
                Some(err) => Err(err),
                None => Ok("module"),
            }
        }
    }

    #[test]
    fn allowlisted_path_is_delegated() {
        let loader = RecordingLoader::new();
        let module = block_on(safe_load(&loader, "@/components/pwa-install-prompt"));

        assert_eq!(module, Ok("module"));
        assert_eq!(
            *loader.requests.borrow(),
            vec![OptionalBundle::PwaInstallPrompt]
        );
    }

    #[test]
    fn rejected_path_never_reaches_the_loader() {
        let loader = RecordingLoader::new();
        let result = block_on(safe_load(&loader, "@/components/anything-else"));

        assert_eq!(
            result,
            Err(ImportError::unauthorized("@/components/anything-else"))
        );
        assert!(loader.requests.borrow().is_empty());
    }

    #[test]
    fn rejection_error_names_the_path() {
        let loader = RecordingLoader::new();
        let err = block_on(safe_load(&loader, "")).unwrap_err();

        assert_eq!(err.path(), "");
        assert_eq!(err.to_string(), "unauthorized import: ");
    }

    #[test]
    fn loader_failures_pass_through_unchanged() {
        let loader = RecordingLoader::new();
        let failure = ImportError::load_failed("@/components/pwa-install-prompt", "network down");
        loader.fail_with.set(Some(failure.clone()));

        let result = block_on(safe_load(&loader, "@/components/pwa-install-prompt"));
        assert_eq!(result, Err(failure));
    }
}
