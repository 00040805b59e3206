//! Layered error definitions
//!
//! Configuration errors are always fatal: the streamer never spawns a process
//! without a loaded `Settings`.

use thiserror::Error;

/// Unified configuration error type
#[derive(Debug, Error)]
pub enum ContractError {
    /// The running executable's location cannot be resolved
    #[error("cannot determine executable location: {source}")]
    ExecutablePath {
        #[source]
        source: std::io::Error,
    },

    /// Configuration file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: String },

    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }
}
