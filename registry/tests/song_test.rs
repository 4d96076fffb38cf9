use playlistctl_core::Song;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_display() {
        let song = Song::new("Blue Monday", "New Order");
        assert_eq!(song.title(), "Blue Monday");
        assert_eq!(song.artist(), "New Order");
        assert_eq!(song.to_string(), "Blue Monday - New Order");
    }

    #[test]
    fn test_title_lookup_ignores_artist() {
        let song1 = Song::new("Intro", "The xx");
        let song2 = Song::new("Intro", "M83");
        assert!(song1.has_title("Intro"));
        assert!(song2.has_title("Intro"));
        assert!(!song1.has_title("intro"));
        assert_ne!(song1, song2);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let song = Song::new("Intro", "The xx");
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Intro", "artist": "The xx" })
        );

        let back: Song = serde_json::from_value(json).unwrap();
        assert_eq!(back, song);
    }
}
