//! Error types for the cocktail catalog.

use thiserror::Error;

use crate::models::RecipeId;

/// Result type alias using the catalog's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for catalog operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration or seed document could not be retrieved
    #[error("Source error: {0}")]
    Source(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Persisted storage rejected a write (quota, permissions, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Recipe not found
    #[error("Recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rejected image upload (wrong type or oversized)
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
