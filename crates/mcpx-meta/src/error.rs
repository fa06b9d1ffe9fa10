//! Error types for mcpx-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The canonical document does not match the schema.
    #[error("Invalid configuration at `{path}`: {message}")]
    Validation { path: String, message: String },

    #[error(
        "Invalid server name '{name}': must start with a letter or digit and contain only letters, digits, '.', '_' or '-'"
    )]
    InvalidServerName { name: String },

    #[error("Unknown provider: {id}")]
    UnknownProvider { id: String },
}

impl Error {
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            message: message.into(),
        }
    }
}
