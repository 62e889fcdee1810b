//! Cadence Player - Playback and Playlist Control
//!
//! Platform-agnostic controller for a single-page music player.
//!
//! This crate provides:
//! - Catalog loading (HTTP JSON, once per session)
//! - Transport control (play/pause, next, previous, seek, volume)
//! - Shuffle and repeat modes
//! - A derived playlist view (all, favorites, recently played, search)
//! - Persisted favorites, recently played list and visit counter
//! - Progress presentation (`m:ss` labels and seek-bar values)
//!
//! # Architecture
//!
//! `cadence-playback` owns no rendering surface and touches no browser
//! globals. The media engine, key-value store, speech recognizer and random
//! index chooser are injected as traits from `cadence-core`. Handlers queue
//! [`PlayerEvent`]s which the rendering layer drains after each call.
//!
//! Browser bindings live behind the `wasm` feature.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Catalog, MediaEngine, MemoryStore, Song};
//! use cadence_playback::{PlayerConfig, PlayerController, UnsupportedSpeech};
//!
//! # #[derive(Default)]
//! # struct SilentEngine { volume: f64, time: f64 }
//! # impl MediaEngine for SilentEngine {
//! #     fn load(&mut self, _src: &str) { self.time = 0.0; }
//! #     fn play(&mut self) -> cadence_core::Result<()> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn current_time(&self) -> f64 { self.time }
//! #     fn set_current_time(&mut self, seconds: f64) { self.time = seconds; }
//! #     fn duration(&self) -> Option<f64> { None }
//! #     fn volume(&self) -> f64 { self.volume }
//! #     fn set_volume(&mut self, volume: f64) { self.volume = volume; }
//! # }
//! let mut player = PlayerController::new(
//!     PlayerConfig::default(),
//!     Box::new(SilentEngine::default()),
//!     Box::new(MemoryStore::new()),
//!     Box::new(UnsupportedSpeech),
//! );
//!
//! let catalog = Catalog::new(vec![
//!     Song::new(1, "Intro", "Band", "songs/1.mp3", "img/1.jpg"),
//!     Song::new(2, "Outro", "Band", "songs/2.mp3", "img/2.jpg"),
//! ])
//! .unwrap();
//!
//! player.begin_loading().unwrap();
//! player.finish_loading(Ok(catalog)).unwrap();
//!
//! player.toggle_play_pause();
//! player.next();
//! assert_eq!(player.current_index(), Some(1));
//!
//! for event in player.drain_events() {
//!     // update the page
//!     let _ = event;
//! }
//! ```

mod config;
mod controller;
mod error;
mod events;
mod favorites;
mod loader;
mod preferences;
mod progress;
mod recent;
mod shuffle;
mod speech;
pub mod types;
mod view;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use config::{PlayerConfig, StorageKeys, DEFAULT_RECENT_LIMIT};
pub use controller::{PlayerController, VOICE_UNSUPPORTED_NOTICE};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use favorites::FavoriteSet;
pub use loader::HttpCatalogSource;
pub use preferences::PreferenceStore;
pub use progress::{format_time, ProgressPresenter, ProgressView};
pub use recent::RecentlyPlayed;
pub use shuffle::{pick_other_index, ThreadRngChooser};
pub use speech::UnsupportedSpeech;
pub use types::{Lifecycle, PlaybackState, Tab};
pub use view::{derive_playlist, ActiveFilter, PlaylistEntry, ViewFilter};
pub use volume::Volume;
