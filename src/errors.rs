//! Error types for the lanekit CLI
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for lanekit operations
pub type Result<T> = std::result::Result<T, LanekitError>;

/// Main error type for all lanekit operations
#[derive(Debug, Error)]
pub enum LanekitError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LanekitError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            LanekitError::InvalidJson(_) => "INVALID_JSON",
            LanekitError::ConfigError(_) => "CONFIG_ERROR",
            LanekitError::FileNotFound(_) => "FILE_NOT_FOUND",
            LanekitError::Io(_) => "IO_ERROR",
        }
    }
}

/// Convert an error to an exit code; every failure exits with 1
pub fn to_exit_code(_error: &LanekitError) -> i32 {
    1
}
