//! `localStorage` key-value store

use cadence_core::{CoreError, KeyValueStore};
use tracing::warn;
use web_sys::Storage;

/// Key-value store over the window's `localStorage`
///
/// When storage is unavailable (disabled, sandboxed frame) reads return
/// nothing and writes fail, which the preference store absorbs.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!(error = ?e, "localStorage unavailable");
                None
            }
        });
        Self { storage }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> cadence_core::Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CoreError::storage("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("{:?}", e)))
    }
}
