use log::{debug, info};
use std::iter::Enumerate;
use std::slice;

use crate::error::RegistryError;
use crate::models::cursor::{Cursor, NowPlaying};
use crate::models::song::Song;

/// Ordered, in-memory playlist with a playback cursor.
///
/// Positions handed in and out of the registry are 1-based. Position
/// arguments are signed so that zero and negative user input reach the
/// `InvalidPosition` check instead of being rejected by the type system.
#[derive(Debug, Default)]
pub struct SongRegistry {
    inner: Vec<Song>,
    cursor: Cursor,
}

impl SongRegistry {
    pub fn new() -> Self {
        Self {
            inner: Vec::new(),
            cursor: Cursor::Unset,
        }
    }

    // Append a song to the end of the playlist
    pub fn add_end(&mut self, title: impl Into<String>, artist: impl Into<String>) {
        let song = Song::new(title, artist);
        debug!("[+] adding {} at position {}", song, self.inner.len() + 1);
        self.inner.push(song);
    }

    // Prepend a song to the start of the playlist
    pub fn add_beginning(&mut self, title: impl Into<String>, artist: impl Into<String>) {
        let song = Song::new(title, artist);
        debug!("[+] adding {} at position 1", song);
        self.inner.insert(0, song);
        self.cursor.shift_for_insert(0);
    }

    /// Insert a song so that it ends up at `pos`.
    ///
    /// `pos` may be anything from 1 up to one past the current length; the
    /// latter appends.
    pub fn insert_at(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        pos: i64,
    ) -> Result<(), RegistryError> {
        if pos <= 0 {
            return Err(RegistryError::InvalidPosition { pos });
        }
        if pos == 1 {
            self.add_beginning(title, artist);
            return Ok(());
        }

        let index = self.index_within(pos, self.inner.len() + 1)?;
        let song = Song::new(title, artist);
        debug!("[+] inserting {} at position {}", song, pos);
        self.inner.insert(index, song);
        self.cursor.shift_for_insert(index);
        Ok(())
    }

    /// Remove the first song whose title matches exactly.
    pub fn delete_by_title(&mut self, title: &str) -> Result<Song, RegistryError> {
        if self.inner.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        let position = self.find_by_title(title)?;
        Ok(self.remove_index(position - 1))
    }

    /// Remove whatever song currently sits at `pos`.
    pub fn delete_at(&mut self, pos: i64) -> Result<Song, RegistryError> {
        if self.inner.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        let index = self.index_within(pos, self.inner.len())?;
        Ok(self.remove_index(index))
    }

    /// 1-based position of the first song with this exact title.
    pub fn find_by_title(&self, title: &str) -> Result<usize, RegistryError> {
        self.inner
            .iter()
            .position(|song| song.has_title(title))
            .map(|index| index + 1)
            .ok_or_else(|| RegistryError::NotFound {
                title: title.to_string(),
            })
    }

    /// Case-insensitive substring search over titles and artists.
    ///
    /// An empty (or all-whitespace) query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Entry<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries()
            .filter(|entry| entry.song.matches_query(&needle))
            .collect()
    }

    /// Current playlist order, or `EmptyRegistry` when there is nothing to
    /// show.
    pub fn list(&self) -> Result<Listing<'_>, RegistryError> {
        if self.inner.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        Ok(Listing { songs: &self.inner })
    }

    pub fn count(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn songs(&self) -> &[Song] {
        &self.inner
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn now_playing(&self) -> Option<&Song> {
        self.cursor.index().and_then(|index| self.inner.get(index))
    }

    /// Report the song under the cursor and step forward.
    ///
    /// The very first call only places the cursor on song 1. Every later call
    /// reports the current song and then advances; on the last song it sets
    /// `end_reached` and stays put.
    pub fn play_next(&mut self) -> Result<NowPlaying<'_>, RegistryError> {
        let index = match self.cursor {
            Cursor::Unset => {
                if self.inner.is_empty() {
                    return Err(RegistryError::EmptyRegistry);
                }
                self.cursor = Cursor::At(0);
                info!("[-] playback cursor placed on position 1");
                return Ok(NowPlaying {
                    position: 1,
                    song: &self.inner[0],
                    end_reached: false,
                });
            }
            Cursor::At(index) => index,
        };

        let end_reached = index + 1 >= self.inner.len();
        if end_reached {
            info!("[-] end of playlist reached at position {}", index + 1);
        } else {
            self.cursor = Cursor::At(index + 1);
            debug!("[-] playback cursor advanced to position {}", index + 2);
        }

        Ok(NowPlaying {
            position: index + 1,
            song: &self.inner[index],
            end_reached,
        })
    }

    /// Step the cursor back one song and report it.
    ///
    /// Returns `Ok(None)` when there is nothing before the cursor (it is unset
    /// or already on the first song); the cursor is left untouched then.
    pub fn play_previous(&mut self) -> Result<Option<NowPlaying<'_>>, RegistryError> {
        if self.inner.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        let index = match self.cursor {
            Cursor::At(index) if index > 0 => index - 1,
            _ => return Ok(None),
        };

        self.cursor = Cursor::At(index);
        debug!("[-] playback cursor moved back to position {}", index + 1);
        Ok(Some(self.playing_at(index)))
    }

    /// Jump the cursor straight to `pos` and report that song.
    pub fn play_at(&mut self, pos: i64) -> Result<NowPlaying<'_>, RegistryError> {
        if self.inner.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        let index = self.index_within(pos, self.inner.len())?;

        self.cursor = Cursor::At(index);
        debug!("[-] playback cursor jumped to position {}", pos);
        Ok(self.playing_at(index))
    }

    pub fn reset_playback(&mut self) {
        self.cursor = if self.inner.is_empty() {
            Cursor::Unset
        } else {
            Cursor::At(0)
        };
        info!("[-] playback reset to {:?}", self.cursor);
    }

    fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.inner.iter().enumerate(),
        }
    }

    fn playing_at(&self, index: usize) -> NowPlaying<'_> {
        NowPlaying {
            position: index + 1,
            song: &self.inner[index],
            end_reached: index + 1 == self.inner.len(),
        }
    }

    // Validate a 1-based `pos` against an inclusive upper bound and turn it
    // into a zero-based index.
    fn index_within(&self, pos: i64, upper: usize) -> Result<usize, RegistryError> {
        if pos <= 0 {
            return Err(RegistryError::InvalidPosition { pos });
        }
        match usize::try_from(pos) {
            Ok(position) if position <= upper => Ok(position - 1),
            _ => Err(RegistryError::PositionOutOfRange {
                pos,
                len: self.inner.len(),
            }),
        }
    }

    fn remove_index(&mut self, index: usize) -> Song {
        let song = self.inner.remove(index);
        self.cursor.shift_for_remove(index);
        debug!(
            "[+] removed {} from position {}, {} songs left",
            song,
            index + 1,
            self.inner.len()
        );
        song
    }
}

/// One row of a playlist listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub position: usize,
    pub song: &'a Song,
}

impl<'a> Entry<'a> {
    pub fn title(&self) -> &'a str {
        self.song.title()
    }

    pub fn artist(&self) -> &'a str {
        self.song.artist()
    }
}

/// A borrowed view of a non-empty playlist.
///
/// Iterating does no work up front and the view can be walked any number of
/// times.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    songs: &'a [Song],
}

impl<'a> Listing<'a> {
    pub fn iter(&self) -> Entries<'a> {
        Entries {
            inner: self.songs.iter().enumerate(),
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    // a Listing only exists for a non-empty registry
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for Listing<'a> {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Listing<'a> {
    type Item = Entry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Enumerate<slice::Iter<'a, Song>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, song)| Entry {
                position: index + 1,
                song,
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
