//! Launcher error types

use thiserror::Error;

/// Launcher specific error
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The pipe between the two processes could not be created
    #[error("failed to create pipe: {0}")]
    Pipe(#[source] std::io::Error),

    /// A child process could not be spawned
    #[error("failed to start {process}: {source}")]
    ProcessStart {
        process: String,
        #[source]
        source: std::io::Error,
    },

    /// A child process ended unsuccessfully after starting
    #[error("{process} finished with error: {detail}")]
    ProcessExit { process: String, detail: String },

    /// The capture task went away before reporting whether its process started
    #[error("{process} task ended before reporting its start")]
    TaskLost { process: String },
}

impl LaunchError {
    /// Create process start error
    pub fn process_start(process: impl Into<String>, source: std::io::Error) -> Self {
        Self::ProcessStart {
            process: process.into(),
            source,
        }
    }

    /// Create process exit error
    pub fn process_exit(process: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ProcessExit {
            process: process.into(),
            detail: detail.into(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, LaunchError>;
