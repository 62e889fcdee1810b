//! In-memory key-value store

use crate::error::Result;
use crate::traits::KeyValueStore;
use std::collections::HashMap;

/// Key-value store kept in process memory
///
/// Used by native shells without persistent storage and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_write() {
        let mut store = MemoryStore::new();
        assert!(store.get("favorites").is_none());

        store.set("favorites", "[1]").unwrap();
        store.set("favorites", "[1,2]").unwrap();

        assert_eq!(store.get("favorites").as_deref(), Some("[1,2]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn with_entries_prepopulates() {
        let store = MemoryStore::with_entries([("visitorCount", "4")]);
        assert_eq!(store.get("visitorCount").as_deref(), Some("4"));
        assert!(!store.is_empty());
    }
}
