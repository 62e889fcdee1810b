//! WASM bindings for cadence-playback
//!
//! Browser implementations of the capability traits plus a JavaScript-facing
//! player that wires an `<audio>` element to [`PlayerController`](crate::PlayerController).

pub mod media;
pub mod player;
pub mod speech;
pub mod storage;
pub mod types;

pub use media::HtmlAudioEngine;
pub use player::WasmPlayer;
pub use speech::BrowserSpeech;
pub use storage::BrowserStorage;
pub use types::PlaylistRow;
