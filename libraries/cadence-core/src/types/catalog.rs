/// Song catalog
use crate::error::{CoreError, Result};
use crate::types::{Song, SongId};
use std::collections::HashSet;

/// The full, load-order list of songs
///
/// Built once at startup and never mutated afterwards. Load order is the
/// canonical index order used by playback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog from songs, rejecting duplicate identifiers
    pub fn new(songs: Vec<Song>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(songs.len());
        for song in &songs {
            if !seen.insert(song.id) {
                return Err(CoreError::DuplicateSong(song.id));
            }
        }
        Ok(Self { songs })
    }

    /// Parse a catalog payload: a JSON array of song records
    pub fn from_json(payload: &str) -> Result<Self> {
        let songs: Vec<Song> = serde_json::from_str(payload)?;
        Self::new(songs)
    }

    /// Empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Song at a catalog index
    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Catalog index of a song id
    pub fn index_of(&self, id: SongId) -> Option<usize> {
        self.songs.iter().position(|song| song.id == id)
    }

    /// Song with the given id
    pub fn find(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    /// Iterate songs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// All songs in catalog order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"id": 1, "title": "One", "artist": "A", "filePath": "1.mp3", "imagePath": "1.jpg"},
        {"id": 2, "title": "Two", "artist": "B", "filePath": "2.mp3", "imagePath": "2.jpg"},
        {"id": 3, "title": "Three", "artist": "C", "filePath": "3.mp3", "imagePath": "3.jpg"}
    ]"#;

    #[test]
    fn parses_payload_in_load_order() {
        let catalog = Catalog::from_json(PAYLOAD).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().title, "One");
        assert_eq!(catalog.get(2).unwrap().title, "Three");
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn looks_up_by_id() {
        let catalog = Catalog::from_json(PAYLOAD).unwrap();

        assert_eq!(catalog.index_of(SongId::new(2)), Some(1));
        assert_eq!(catalog.find(SongId::new(3)).unwrap().artist, "C");
        assert_eq!(catalog.index_of(SongId::new(99)), None);
    }

    #[test]
    fn rejects_malformed_payload() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Payload(_)));

        let err = Catalog::from_json(r#"[{"id": 1}]"#).unwrap_err();
        assert!(matches!(err, CoreError::Payload(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            Song::new(5, "A", "X", "a.mp3", "a.jpg"),
            Song::new(5, "B", "Y", "b.mp3", "b.jpg"),
        ])
        .unwrap_err();

        assert!(matches!(err, CoreError::DuplicateSong(id) if id == SongId::new(5)));
    }

    #[test]
    fn empty_payload_is_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::empty());
    }
}
