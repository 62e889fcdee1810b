//! Core types for the player controller

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playback state at the current catalog index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Song cued but never started
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-song
    Paused,
}

/// Playlist tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Whole catalog in load order
    #[default]
    All,

    /// Favorited songs in catalog order
    Favorites,

    /// Recently played songs, most recent first
    Recent,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Favorites => "favorites",
            Tab::Recent => "recent",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    /// Accepts the tab names used by the page markup; `playlist` is an alias
    /// for `all`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "playlist" => Ok(Tab::All),
            "favorites" => Ok(Tab::Favorites),
            "recent" => Ok(Tab::Recent),
            other => Err(format!("Unknown tab '{}'", other)),
        }
    }
}

/// Controller lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Constructed, catalog not requested yet
    Created,

    /// Catalog fetch in flight
    Loading,

    /// Catalog installed (possibly empty)
    Ready,

    /// Catalog fetch failed; player stays empty
    Failed,

    /// Torn down; every handler is a no-op
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_parses_markup_names() {
        assert_eq!("all".parse::<Tab>().unwrap(), Tab::All);
        assert_eq!("playlist".parse::<Tab>().unwrap(), Tab::All);
        assert_eq!("favorites".parse::<Tab>().unwrap(), Tab::Favorites);
        assert_eq!("recent".parse::<Tab>().unwrap(), Tab::Recent);
        assert!("albums".parse::<Tab>().is_err());
    }

    #[test]
    fn tab_round_trips_through_display() {
        for tab in [Tab::All, Tab::Favorites, Tab::Recent] {
            assert_eq!(tab.to_string().parse::<Tab>().unwrap(), tab);
        }
    }

    #[test]
    fn playback_state_serializes_lowercase() {
        let json = serde_json::to_string(&PlaybackState::Paused).unwrap();
        assert_eq!(json, "\"paused\"");
    }
}
