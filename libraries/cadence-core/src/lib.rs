//! Cadence Player Core
//!
//! Platform-agnostic core types, capability traits, and error handling for
//! Cadence Player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `SongId`, `Catalog`
//! - **Capability Traits**: `MediaEngine`, `KeyValueStore`, `SpeechRecognizer`,
//!   `IndexChooser`, `CatalogSource`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Catalog, SongId};
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"id": 1, "title": "One", "artist": "A", "filePath": "1.mp3", "imagePath": "1.jpg"}]"#,
//! )
//! .unwrap();
//!
//! assert_eq!(catalog.index_of(SongId::new(1)), Some(0));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use storage::MemoryStore;
pub use traits::{
    CatalogSource, IndexChooser, KeyValueStore, MediaEngine, SpeechRecognizer,
    StaticCatalogSource,
};
pub use types::{Catalog, Song, SongId};
