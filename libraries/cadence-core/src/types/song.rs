/// Song domain type
use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// A song in the catalog
///
/// Field names follow the catalog payload (`filePath`, `imagePath`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Media resource locator handed to the media engine
    pub file_path: String,

    /// Cover image locator
    pub image_path: String,
}

impl Song {
    /// Create a new song
    pub fn new(
        id: impl Into<SongId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        file_path: impl Into<String>,
        image_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            file_path: file_path.into(),
            image_path: image_path.into(),
        }
    }

    /// Case-insensitive substring match against title or artist
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_field_names() {
        let song: Song = serde_json::from_str(
            r#"{"id": 4, "title": "Blue", "artist": "Joni", "filePath": "songs/blue.mp3", "imagePath": "img/blue.jpg"}"#,
        )
        .unwrap();

        assert_eq!(song.id, SongId::new(4));
        assert_eq!(song.file_path, "songs/blue.mp3");
        assert_eq!(song.image_path, "img/blue.jpg");
    }

    #[test]
    fn matches_title_or_artist() {
        let song = Song::new(1, "Harvest Moon", "Neil Young", "a.mp3", "a.jpg");

        assert!(song.matches_lowercase("moon"));
        assert!(song.matches_lowercase("neil"));
        assert!(song.matches_lowercase(""));
        assert!(!song.matches_lowercase("joni"));
    }
}
