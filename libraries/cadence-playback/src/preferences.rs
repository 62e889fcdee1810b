//! Persisted user preferences
//!
//! Favorites, recently played, and the visit counter. Each value is loaded
//! once at startup and written back after every mutation. Absent or malformed
//! values load as empty/zero; failed writes are logged and the in-memory copy
//! stays authoritative for the session.

use crate::config::{StorageKeys, DEFAULT_RECENT_LIMIT};
use crate::favorites::FavoriteSet;
use crate::recent::RecentlyPlayed;
use cadence_core::{KeyValueStore, SongId};
use tracing::{debug, warn};

/// Preference store backed by a key-value store
pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
    keys: StorageKeys,
    favorites: FavoriteSet,
    recent: RecentlyPlayed,
    visits: u64,
}

impl PreferenceStore {
    /// Load preferences from `store`
    ///
    /// A `recent_limit` of 0 falls back to the default limit.
    pub fn load(store: Box<dyn KeyValueStore>, keys: StorageKeys, recent_limit: usize) -> Self {
        let recent_limit = if recent_limit == 0 {
            warn!("recent_limit of 0 is not usable, falling back to default");
            DEFAULT_RECENT_LIMIT
        } else {
            recent_limit
        };
        let favorites = FavoriteSet::from_ids(read_ids(store.as_ref(), &keys.favorites));
        let recent =
            RecentlyPlayed::from_ids(read_ids(store.as_ref(), &keys.recent), recent_limit);
        let visits = read_count(store.as_ref(), &keys.visits);

        debug!(
            favorites = favorites.len(),
            recent = recent.len(),
            visits,
            "Loaded preferences"
        );

        Self {
            store,
            keys,
            favorites,
            recent,
            visits,
        }
    }

    /// Flip favorite membership and persist; returns the new membership
    pub fn toggle_favorite(&mut self, id: SongId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        let key = self.keys.favorites.clone();
        self.write_ids(&key, self.favorites.ids().to_vec());
        now_favorite
    }

    /// Move or insert `id` at the front of the recently-played list and persist
    pub fn record_play(&mut self, id: SongId) {
        if let Some(evicted) = self.recent.record(id) {
            debug!(song_id = %evicted, "Evicted from recently played");
        }
        let key = self.keys.recent.clone();
        self.write_ids(&key, self.recent.to_vec());
    }

    /// Count a new session and persist; returns the updated count
    pub fn record_visit(&mut self) -> u64 {
        self.visits = self.visits.saturating_add(1);
        if let Err(e) = self.store.set(&self.keys.visits, &self.visits.to_string()) {
            warn!(key = %self.keys.visits, error = %e, "Failed to persist visit count");
        }
        self.visits
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn recent(&self) -> &RecentlyPlayed {
        &self.recent
    }

    pub fn is_favorite(&self, id: SongId) -> bool {
        self.favorites.contains(id)
    }

    /// Visit count as of the last `record_visit`
    pub fn visits(&self) -> u64 {
        self.visits
    }

    fn write_ids(&mut self, key: &str, ids: Vec<SongId>) {
        let value = match serde_json::to_string(&ids) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to serialize preference list");
                return;
            }
        };
        if let Err(e) = self.store.set(key, &value) {
            warn!(key, error = %e, "Failed to persist preference list");
        }
    }
}

fn read_ids(store: &dyn KeyValueStore, key: &str) -> Vec<SongId> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<SongId>>>(&raw) {
        Ok(ids) => ids.unwrap_or_default(),
        Err(e) => {
            warn!(key, error = %e, "Ignoring malformed preference list");
            Vec::new()
        }
    }
}

/// Leading-integer parse, the way the page's counter was always written
fn read_count(store: &dyn KeyValueStore, key: &str) -> u64 {
    let Some(raw) = store.get(key) else {
        return 0;
    };
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    match trimmed[..digits_end].parse::<u64>() {
        Ok(count) => count,
        Err(_) => {
            warn!(key, value = %raw, "Ignoring malformed visit count");
            0
        }
    }
}
