//! Error types for the player controller

use cadence_core::CoreError;
use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Catalog has not finished loading (or the controller was torn down)
    #[error("Player not ready")]
    NotReady,

    /// `initialize` / `begin_loading` called more than once
    #[error("Player already initialized")]
    AlreadyInitialized,

    /// Catalog is empty
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Index out of bounds
    #[error("Index out of bounds: {index} (catalog has {len} songs)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid seek position
    #[error("Invalid seek position: {0}s")]
    InvalidSeekPosition(f64),

    /// Invalid volume level
    #[error("Invalid volume: {0} (expected 0.0..=1.0)")]
    InvalidVolume(f64),

    /// Speech recognition is not supported on this host
    #[error("Voice search is unavailable")]
    VoiceSearchUnavailable,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Error from a collaborator
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
