//! Favorite songs

use cadence_core::SongId;

/// Set of favorited song ids
///
/// Keeps insertion order so the persisted array reads the way the user built it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<SongId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted ids, dropping duplicates
    pub fn from_ids(ids: impl IntoIterator<Item = SongId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Flip membership; returns `true` when `id` is now a favorite
    pub fn toggle(&mut self, id: SongId) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: SongId) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in insertion order
    pub fn ids(&self) -> &[SongId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
