use crate::models::song::Song;

/// Playback position inside a registry.
///
/// The cursor stores an index rather than a reference, so the registry keeps it
/// in step with every insert and delete. Reaching the end of the playlist does
/// not move it past the last song; that condition is reported through
/// [`NowPlaying::end_reached`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Unset,
    At(usize),
}

impl Cursor {
    /// Zero-based index of the song under the cursor.
    pub fn index(&self) -> Option<usize> {
        match self {
            Cursor::Unset => None,
            Cursor::At(index) => Some(*index),
        }
    }

    // a song landed at `index`; everything from there on moved back one slot
    pub(crate) fn shift_for_insert(&mut self, index: usize) {
        if let Cursor::At(current) = self {
            if index <= *current {
                *current += 1;
            }
        }
    }

    pub(crate) fn shift_for_remove(&mut self, index: usize) {
        if let Cursor::At(current) = *self {
            if current == index {
                *self = Cursor::Unset;
            } else if current > index {
                *self = Cursor::At(current - 1);
            }
        }
    }
}

/// What a playback call reports back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlaying<'a> {
    /// 1-based position of `song`.
    pub position: usize,
    pub song: &'a Song,
    /// No song follows `song`; the cursor stays where it is.
    pub end_reached: bool,
}
