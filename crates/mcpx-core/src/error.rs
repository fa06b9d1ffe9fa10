//! Error types for mcpx-core

/// Result type for mcpx-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mcpx-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `.mcpx.json` is missing
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: String },

    /// `.mcpx.json` is not JSON at all
    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from mcpx-fs
    #[error(transparent)]
    Fs(#[from] mcpx_fs::Error),

    /// Validation error from mcpx-meta
    #[error(transparent)]
    Meta(#[from] mcpx_meta::Error),

    /// Native format error from mcpx-providers
    #[error(transparent)]
    Providers(#[from] mcpx_providers::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
