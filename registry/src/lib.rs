pub mod error;
pub mod models;

pub use crate::error::RegistryError;
pub use crate::models::song::Song;
pub use crate::models::song_registry::SongRegistry;
