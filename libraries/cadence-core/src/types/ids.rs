/// ID types for Cadence Player entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Song identifier
///
/// Catalog payloads carry integer ids; persisted preference lists store the
/// same integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(i64);

impl SongId {
    /// Create a new song ID
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SongId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&vec![SongId::new(3), SongId::new(1)]).unwrap();
        assert_eq!(json, "[3,1]");

        let ids: Vec<SongId> = serde_json::from_str("[7, 8]").unwrap();
        assert_eq!(ids, vec![SongId::new(7), SongId::new(8)]);
    }

    #[test]
    fn song_id_display() {
        assert_eq!(SongId::from(42).to_string(), "42");
    }
}
