//! Player configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default number of recently-played entries kept
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Configuration for the player controller
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Where the catalog payload is fetched from (default: `data/songs.json`)
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Maximum recently-played entries (default: 20)
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Volume applied to the media engine at startup (default: 1.0)
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,

    /// Language tag handed to speech recognition (default: `en-US`)
    #[serde(default = "default_speech_language")]
    pub speech_language: String,

    /// Persistence keys
    #[serde(default)]
    pub storage_keys: StorageKeys,
}

/// Keys used in the key-value store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageKeys {
    #[serde(default = "default_favorites_key")]
    pub favorites: String,

    #[serde(default = "default_recent_key")]
    pub recent: String,

    #[serde(default = "default_visits_key")]
    pub visits: String,
}

fn default_catalog_url() -> String {
    "data/songs.json".to_string()
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_initial_volume() -> f64 {
    1.0
}

fn default_speech_language() -> String {
    "en-US".to_string()
}

fn default_favorites_key() -> String {
    "favorites".to_string()
}

fn default_recent_key() -> String {
    "recentlyPlayed".to_string()
}

fn default_visits_key() -> String {
    "visitorCount".to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            favorites: default_favorites_key(),
            recent: default_recent_key(),
            visits: default_visits_key(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            recent_limit: default_recent_limit(),
            initial_volume: default_initial_volume(),
            speech_language: default_speech_language(),
            storage_keys: StorageKeys::default(),
        }
    }
}

impl PlayerConfig {
    /// Parse configuration overrides from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        if config.recent_limit == 0 {
            tracing::warn!("recent_limit of 0 is not usable, falling back to default");
            config.recent_limit = DEFAULT_RECENT_LIMIT;
        }
        if !(0.0..=1.0).contains(&config.initial_volume) {
            tracing::warn!(
                volume = config.initial_volume,
                "initial_volume out of range, clamping"
            );
            config.initial_volume = if config.initial_volume.is_nan() {
                default_initial_volume()
            } else {
                config.initial_volume.clamp(0.0, 1.0)
            };
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.catalog_url, "data/songs.json");
        assert_eq!(config.recent_limit, 20);
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.speech_language, "en-US");
        assert_eq!(config.storage_keys.favorites, "favorites");
        assert_eq!(config.storage_keys.recent, "recentlyPlayed");
        assert_eq!(config.storage_keys.visits, "visitorCount");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PlayerConfig::from_json("{}").unwrap(), PlayerConfig::default());
    }

    #[test]
    fn partial_overrides() {
        let config = PlayerConfig::from_json(
            r#"{"recent_limit": 5, "storage_keys": {"favorites": "favs"}}"#,
        )
        .unwrap();

        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.storage_keys.favorites, "favs");
        assert_eq!(config.storage_keys.recent, "recentlyPlayed");
        assert_eq!(config.catalog_url, "data/songs.json");
    }

    #[test]
    fn unusable_values_are_repaired() {
        let config =
            PlayerConfig::from_json(r#"{"recent_limit": 0, "initial_volume": 3.5}"#).unwrap();

        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
        assert_eq!(config.initial_volume, 1.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PlayerConfig::from_json("{recent_limit: }").is_err());
    }
}
