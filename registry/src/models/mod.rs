pub mod cursor;
pub mod song;
pub mod song_registry;
