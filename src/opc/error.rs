//! Error types for OPC package operations.

use thiserror::Error;

/// Result type for OPC operations.
pub type Result<T> = std::result::Result<T, OpcError>;

/// Error types for OPC operations.
#[derive(Error, Debug)]
pub enum OpcError {
    /// A part name did not follow the pack URI rules
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
