//! Dynamic `import()` bridge for optional bundles.

use async_trait::async_trait;
use parlor_frontend_common::bundles::{BundleLoader, OptionalBundle};
use parlor_frontend_common::error::ImportError;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
export function import_bundle(path) {
    return import(path);
}
")]
extern "C" {
    #[wasm_bindgen(js_name = import_bundle, catch)]
    async fn import_bundle(path: &str) -> Result<JsValue, JsValue>;
}

/// Loads optional bundles through the host's module loader.
///
/// Only ever handed [`OptionalBundle`] variants, so the path passed to the
/// host `import()` is always one of the statically linked targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct DynamicImportLoader;

impl DynamicImportLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl BundleLoader for DynamicImportLoader {
    type Module = JsValue;

    async fn load(&self, bundle: OptionalBundle) -> Result<JsValue, ImportError> {
        import_bundle(bundle.path())
            .await
            .map_err(|err| ImportError::load_failed(bundle.path(), format!("{err:?}")))
    }
}
