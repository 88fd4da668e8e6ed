//! Unified error types for deckforge.

use thiserror::Error;

/// Result type for deckforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for deck generation.
#[derive(Error, Debug)]
pub enum Error {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::OpcError),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A referenced input asset does not exist
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
