/// Core error types for Cadence Player
use thiserror::Error;
use crate::types::SongId;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Cadence Player
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog payload could not be decoded
    #[error("Catalog payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Two catalog entries share an identifier
    #[error("Duplicate song id in catalog: {0}")]
    DuplicateSong(SongId),

    /// Catalog could not be fetched
    #[error("Network error: {0}")]
    Network(String),

    /// Key-value store rejected a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Media engine rejected a request
    #[error("Media error: {0}")]
    Media(String),

    /// Speech recognition failed to start
    #[error("Speech recognition error: {0}")]
    Speech(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a media error
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Create a speech recognition error
    pub fn speech(msg: impl Into<String>) -> Self {
        Self::Speech(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
