//! Playlist view model
//!
//! The visible playlist is always derived from the catalog, the active filter,
//! and the preference lists. Nothing here is stored between renders.

use crate::favorites::FavoriteSet;
use crate::recent::RecentlyPlayed;
use crate::types::Tab;
use cadence_core::{Catalog, Song};
use serde::Serialize;

/// Selected tab plus optional search text
///
/// Non-blank search text is the active filter and overrides the tab. Blank
/// text falls back to the tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    tab: Tab,
    search: Option<String>,
}

/// The filter currently shaping the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter<'a> {
    /// Case-insensitive match on title or artist
    Search(&'a str),

    /// Tab contents
    Tab(Tab),
}

impl ViewFilter {
    pub fn new(tab: Tab) -> Self {
        Self { tab, search: None }
    }

    /// Select a tab; clears any search text
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.search = None;
    }

    /// Set the search text; blank text clears the search
    pub fn set_search(&mut self, text: &str) {
        self.search = if text.trim().is_empty() {
            None
        } else {
            Some(text.to_string())
        };
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Current search text, if a search is active
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn active(&self) -> ActiveFilter<'_> {
        match self.search.as_deref() {
            Some(text) => ActiveFilter::Search(text),
            None => ActiveFilter::Tab(self.tab),
        }
    }
}

/// One row of the derived playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry<'a> {
    /// Position in the catalog (not in the view); pass this to `play_index`
    pub catalog_index: usize,

    pub song: &'a Song,

    pub is_favorite: bool,
}

/// Derive the visible playlist
pub fn derive_playlist<'a>(
    catalog: &'a Catalog,
    filter: &ViewFilter,
    favorites: &FavoriteSet,
    recent: &RecentlyPlayed,
) -> Vec<PlaylistEntry<'a>> {
    let entry = |catalog_index: usize, song: &'a Song| PlaylistEntry {
        catalog_index,
        song,
        is_favorite: favorites.contains(song.id),
    };

    match filter.active() {
        ActiveFilter::Search(text) => {
            let needle = text.to_lowercase();
            catalog
                .iter()
                .enumerate()
                .filter(|(_, song)| song.matches_lowercase(&needle))
                .map(|(index, song)| entry(index, song))
                .collect()
        }
        ActiveFilter::Tab(Tab::All) => catalog
            .iter()
            .enumerate()
            .map(|(index, song)| entry(index, song))
            .collect(),
        ActiveFilter::Tab(Tab::Favorites) => catalog
            .iter()
            .enumerate()
            .filter(|(_, song)| favorites.contains(song.id))
            .map(|(index, song)| entry(index, song))
            .collect(),
        // Ids that no longer match a catalog song are dropped
        ActiveFilter::Tab(Tab::Recent) => recent
            .ids()
            .filter_map(|id| {
                let index = catalog.index_of(id)?;
                catalog.get(index).map(|song| entry(index, song))
            })
            .collect(),
    }
}
