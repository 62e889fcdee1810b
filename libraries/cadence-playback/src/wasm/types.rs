//! JavaScript-facing view types

use crate::PlaylistEntry;
use cadence_core::Song;
use serde::Serialize;

/// One rendered playlist row
///
/// Adds the now-playing flag so the page can highlight the row without
/// comparing indices itself.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRow<'a> {
    catalog_index: usize,
    song: &'a Song,
    is_favorite: bool,
    is_current: bool,
}

impl<'a> PlaylistRow<'a> {
    pub fn new(entry: PlaylistEntry<'a>, current: Option<usize>) -> Self {
        Self {
            catalog_index: entry.catalog_index,
            song: entry.song,
            is_favorite: entry.is_favorite,
            is_current: current == Some(entry.catalog_index),
        }
    }
}
