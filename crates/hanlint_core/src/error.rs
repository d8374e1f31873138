//! Checker error types.

use thiserror::Error;

/// Errors that can occur around a check invocation.
///
/// The detectors themselves are total over arbitrary text; errors only
/// arise at the collaborator boundary (config loading, file reading).
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File error.
    #[error("File error: {0}")]
    File(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}
