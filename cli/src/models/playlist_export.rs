use serde::Serialize;

use playlistctl_core::{Song, SongRegistry};

// Snapshot of the playlist for the JSON export command
#[derive(Debug, Serialize)]
pub struct PlaylistExport<'a> {
    pub name: &'a str,
    pub length: usize,
    pub now_playing: Option<&'a Song>,
    pub songs: &'a [Song],
}

impl<'a> PlaylistExport<'a> {
    pub fn from_registry(name: &'a str, registry: &'a SongRegistry) -> Self {
        Self {
            name,
            length: registry.count(),
            now_playing: registry.now_playing(),
            songs: registry.songs(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_shape() {
        let mut registry = SongRegistry::new();
        registry.add_end("A", "X");
        registry.add_end("B", "Y");
        registry.play_next().unwrap();

        let json = PlaylistExport::from_registry("Mix", &registry).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Mix",
                "length": 2,
                "now_playing": { "title": "A", "artist": "X" },
                "songs": [
                    { "title": "A", "artist": "X" },
                    { "title": "B", "artist": "Y" }
                ]
            })
        );
    }

    #[test]
    fn test_export_empty_playlist() {
        let registry = SongRegistry::new();
        let json = PlaylistExport::from_registry("Mix", &registry).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["length"], 0);
        assert!(value["now_playing"].is_null());
        assert_eq!(value["songs"], serde_json::json!([]));
    }
}
