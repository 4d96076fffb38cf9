pub mod playlist_export;
