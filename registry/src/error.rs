use thiserror::Error;

/// Every failure a registry operation can report.
///
/// All of them are recoverable: the operation that returned the error left the
/// registry (and its playback cursor) exactly as it found it.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("Invalid position {pos}, positions start at 1")]
    InvalidPosition { pos: i64 },
    #[error("Position {pos} is out of range for a playlist of {len} songs")]
    PositionOutOfRange { pos: i64, len: usize },
    #[error("The playlist is empty!")]
    EmptyRegistry,
    #[error("No song titled {title:?} in the playlist")]
    NotFound { title: String },
}
