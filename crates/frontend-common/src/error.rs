//! Common error types for the front end crates

/// Errors raised by the gated bundle loader
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("unauthorized import: {path}")]
    UnauthorizedImport { path: String },

    #[error("failed to load bundle {path}: {message}")]
    LoadFailed { path: String, message: String },
}

impl ImportError {
    /// Create an unauthorized import error for a rejected path
    pub fn unauthorized(path: impl Into<String>) -> Self {
        Self::UnauthorizedImport { path: path.into() }
    }

    /// Create a load failure error for an allowlisted path that failed to fetch
    pub fn load_failed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoadFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The module path the failing request named
    pub fn path(&self) -> &str {
        match self {
            Self::UnauthorizedImport { path } | Self::LoadFailed { path, .. } => path,
        }
    }
}
