//! Error types for the compliance ledger core.

use thiserror::Error;

/// Result type alias for ledger core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ledger core operations.
#[derive(Error, Debug)]
pub enum Error {
    // Authorization errors
    #[error("unauthorized client identity")]
    Unauthorized,

    // Record errors
    #[error("log with ID {0} already exists")]
    AlreadyExists(String),

    #[error("log with ID {0} not found")]
    NotFound(String),

    // Serialization errors
    #[error("serialization error: {0}")]
    SerializationError(String),

    // Input errors
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Collaborator errors
    #[error("ledger error: {0}")]
    Ledger(String),

    // Generic errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
