//! Error types for mcpx-providers

use mcpx_meta::ProviderId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Native file content does not match the provider's grammar.
    #[error("Failed to parse {provider} config: {message}")]
    Parse {
        provider: ProviderId,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }
}
