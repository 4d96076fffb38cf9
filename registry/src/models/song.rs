//! A single playlist entry.
//!
//! Songs are immutable once built. Lookup and deletion identify a song by its
//! `title` alone, which acts as our "Primary Key" even though titles are not
//! unique; the first match in playlist order wins.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    title: String,
    artist: String,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Exact, case-sensitive title comparison used by find and delete.
    pub fn has_title(&self, title: &str) -> bool {
        self.title == title
    }

    /// Case-insensitive substring match against title or artist.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.artist)
    }
}
