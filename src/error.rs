// file: src/error.rs
// version: 1.0.0
// guid: 9d5e2b70-1a4f-4c38-8e61-f20a7c94d3b5

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, PrepError>;

/// Error types for iDRAC MAAS prep
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("SSH error: {0}")]
    Ssh(String),
}

impl PrepError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new SSH transport error
    pub fn ssh(msg: impl Into<String>) -> Self {
        Self::Ssh(msg.into())
    }
}
