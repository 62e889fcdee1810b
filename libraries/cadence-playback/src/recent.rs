//! Recently-played tracking
//!
//! Maintains a bounded, duplicate-free list of song ids, most recent first.

use cadence_core::SongId;
use std::collections::VecDeque;

/// Recently-played list with bounded size
///
/// Re-playing a song moves it to the front instead of adding a second entry.
/// When the list is full the oldest entry (the back) is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentlyPlayed {
    /// Most recent = front
    ids: VecDeque<SongId>,

    /// Maximum list size
    max_size: usize,
}

impl RecentlyPlayed {
    /// Create an empty list with the specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            ids: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Rebuild a list from persisted ids (most recent first)
    ///
    /// Duplicates keep their first (most recent) position; entries past
    /// `max_size` are dropped.
    pub fn from_ids(ids: impl IntoIterator<Item = SongId>, max_size: usize) -> Self {
        let mut list = Self::new(max_size);
        for id in ids {
            if list.ids.len() >= max_size {
                break;
            }
            if !list.ids.contains(&id) {
                list.ids.push_back(id);
            }
        }
        list
    }

    /// Record a play: move or insert `id` at the front
    ///
    /// Returns the evicted id when the list overflowed.
    pub fn record(&mut self, id: SongId) -> Option<SongId> {
        self.ids.retain(|existing| *existing != id);
        self.ids.push_front(id);

        if self.ids.len() > self.max_size {
            self.ids.pop_back()
        } else {
            None
        }
    }

    /// Most recent song id
    pub fn latest(&self) -> Option<SongId> {
        self.ids.front().copied()
    }

    /// All ids, most recent first
    pub fn ids(&self) -> impl Iterator<Item = SongId> + '_ {
        self.ids.iter().copied()
    }

    /// Ids as a vector, most recent first
    pub fn to_vec(&self) -> Vec<SongId> {
        self.ids.iter().copied().collect()
    }

    pub fn contains(&self, id: SongId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Get maximum list size
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for RecentlyPlayed {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_RECENT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: i64) -> SongId {
        SongId::new(n)
    }

    #[test]
    fn record_inserts_at_front() {
        let mut recent = RecentlyPlayed::new(10);
        recent.record(id(1));
        recent.record(id(2));

        assert_eq!(recent.to_vec(), vec![id(2), id(1)]);
        assert_eq!(recent.latest(), Some(id(2)));
    }

    #[test]
    fn replay_moves_to_front_without_duplicate() {
        let mut recent = RecentlyPlayed::new(10);
        recent.record(id(1));
        recent.record(id(2));
        recent.record(id(1));

        assert_eq!(recent.to_vec(), vec![id(1), id(2)]);
    }

    #[test]
    fn repeated_record_is_idempotent() {
        let mut recent = RecentlyPlayed::new(10);
        recent.record(id(1));
        recent.record(id(2));
        let before = recent.clone();

        recent.record(id(2));
        recent.record(id(2));

        assert_eq!(recent, before);
    }

    #[test]
    fn bounded_evicts_oldest() {
        let mut recent = RecentlyPlayed::new(3);
        assert_eq!(recent.record(id(1)), None);
        assert_eq!(recent.record(id(2)), None);
        assert_eq!(recent.record(id(3)), None);

        // 4th song pushes out the oldest
        assert_eq!(recent.record(id(4)), Some(id(1)));
        assert_eq!(recent.to_vec(), vec![id(4), id(3), id(2)]);
    }

    #[test]
    fn replay_of_existing_entry_never_evicts() {
        let mut recent = RecentlyPlayed::new(3);
        recent.record(id(1));
        recent.record(id(2));
        recent.record(id(3));

        assert_eq!(recent.record(id(1)), None);
        assert_eq!(recent.to_vec(), vec![id(1), id(3), id(2)]);
    }

    #[test]
    fn from_ids_drops_duplicates_and_overflow() {
        let recent = RecentlyPlayed::from_ids([id(5), id(4), id(5), id(3), id(2)], 3);
        assert_eq!(recent.to_vec(), vec![id(5), id(4), id(3)]);
    }

    #[test]
    fn default_limit() {
        let recent = RecentlyPlayed::default();
        assert_eq!(recent.max_size(), 20);
        assert!(recent.is_empty());
    }
}
