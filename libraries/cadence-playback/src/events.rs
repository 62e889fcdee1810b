//! Player Events
//!
//! Event-based communication with the rendering layer. Handlers on the
//! controller mutate state and queue events; the rendering layer drains the
//! queue after each handler and updates only what changed.

use crate::progress::ProgressView;
use crate::types::PlaybackState;
use cadence_core::{Song, SongId};
use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerEvent {
    /// Catalog installed
    CatalogLoaded {
        /// Number of songs
        songs: usize,
    },

    /// Playback state changed (playing, paused, stopped)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different song (or the same song again) was loaded into the engine
    SongChanged {
        /// Catalog index of the song
        index: usize,
        /// Song metadata for the now-playing panel
        song: Song,
    },

    /// Shuffle or repeat flipped
    ModesChanged {
        shuffle: bool,
        repeat: bool,
    },

    /// Derived playlist must be recomputed (filter, tab, or favorites changed)
    ViewChanged,

    /// Favorite membership changed
    FavoriteToggled {
        song_id: SongId,
        is_favorite: bool,
    },

    /// Duration or position changed
    Progress {
        progress: ProgressView,
    },

    /// Volume changed
    VolumeChanged {
        /// New linear level (0.0-1.0)
        level: f64,
    },

    /// Session visit count
    VisitCount {
        count: u64,
    },

    /// Voice search is unavailable for the rest of the session
    VoiceSearchDisabled,

    /// One-time user-visible notice
    Notice {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_for_javascript() {
        let json = serde_json::to_value(PlayerEvent::StateChanged {
            state: PlaybackState::Playing,
        })
        .unwrap();

        assert_eq!(json["type"], "stateChanged");
        assert_eq!(json["state"], "playing");

        let json = serde_json::to_value(PlayerEvent::ViewChanged).unwrap();
        assert_eq!(json["type"], "viewChanged");
    }

    #[test]
    fn song_changed_carries_catalog_fields() {
        let json = serde_json::to_value(PlayerEvent::SongChanged {
            index: 2,
            song: Song::new(7, "Title", "Artist", "7.mp3", "7.jpg"),
        })
        .unwrap();

        assert_eq!(json["index"], 2);
        assert_eq!(json["song"]["id"], 7);
        assert_eq!(json["song"]["imagePath"], "7.jpg");
    }
}
