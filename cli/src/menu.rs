use colored::*;
use std::io::{self, BufRead, Write};

#[allow(unused_imports)]
use log::{debug, error, info, warn};

use playlistctl_core::models::cursor::NowPlaying;
use playlistctl_core::{RegistryError, SongRegistry};

use crate::models::playlist_export::PlaylistExport;

/// One menu entry, numbered the way the menu prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddEnd,
    AddBeginning,
    InsertAt,
    DeleteByTitle,
    Search,
    Display,
    Count,
    PlayNext,
    ResetPlay,
    Exit,
    // lettered extras
    PlayPrevious,
    JumpTo,
    DeleteAt,
    Find,
    Export,
}

impl Choice {
    fn parse(input: &str) -> Option<Choice> {
        let choice = match input.trim() {
            "1" => Choice::AddEnd,
            "2" => Choice::AddBeginning,
            "3" => Choice::InsertAt,
            "4" => Choice::DeleteByTitle,
            "5" => Choice::Search,
            "6" => Choice::Display,
            "7" => Choice::Count,
            "8" => Choice::PlayNext,
            "9" => Choice::ResetPlay,
            "10" => Choice::Exit,
            "p" | "P" => Choice::PlayPrevious,
            "j" | "J" => Choice::JumpTo,
            "x" | "X" => Choice::DeleteAt,
            "f" | "F" => Choice::Find,
            "e" | "E" => Choice::Export,
            _ => return None,
        };
        Some(choice)
    }
}

// What the menu loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Text menu over any line-oriented input and any output.
///
/// `main` hands it locked stdin/stdout; tests hand it byte slices.
pub struct Console<R, W> {
    input: R,
    output: W,
    playlist_name: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, playlist_name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            playlist_name: playlist_name.into(),
        }
    }

    /// Run the menu until the user picks exit or input runs out.
    pub fn run(&mut self, registry: &mut SongRegistry) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let line = match self.prompt("Enter your choice: ")? {
                Some(line) => line,
                None => {
                    debug!("[-] input closed, leaving menu");
                    return Ok(());
                }
            };

            let choice = match Choice::parse(&line) {
                Some(choice) => choice,
                None => {
                    debug!("[?] unrecognized menu input: {:?}", line);
                    writeln!(self.output, "{}", "Invalid choice!".red())?;
                    continue;
                }
            };
            debug!("[-] menu choice {:?}", choice);

            if self.dispatch(choice, registry)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    // Stops on exit, or when input runs out while prompting.
    fn dispatch(&mut self, choice: Choice, registry: &mut SongRegistry) -> io::Result<Flow> {
        match choice {
            Choice::AddEnd => {
                let Some((title, artist)) = self.prompt_song()? else {
                    return Ok(Flow::Stop);
                };
                let was_empty = registry.is_empty();
                registry.add_end(title, artist);
                if was_empty {
                    self.success("Song added as first song.")?;
                } else {
                    self.success("Song added to end.")?;
                }
            }
            Choice::AddBeginning => {
                let Some((title, artist)) = self.prompt_song()? else {
                    return Ok(Flow::Stop);
                };
                registry.add_beginning(title, artist);
                self.success("Song added at the beginning.")?;
            }
            Choice::InsertAt => {
                let Some((title, artist)) = self.prompt_song()? else {
                    return Ok(Flow::Stop);
                };
                let Some(pos) = self.prompt("Enter position: ")? else {
                    return Ok(Flow::Stop);
                };
                let Some(pos) = self.parse_position(&pos)? else {
                    return Ok(Flow::Continue);
                };
                match registry.insert_at(title, artist, pos) {
                    Ok(()) if pos == 1 => self.success("Song added at the beginning.")?,
                    Ok(()) => self.success(&format!("Song inserted at position {}.", pos))?,
                    Err(err) => self.failure(&err)?,
                }
            }
            Choice::DeleteByTitle => {
                let Some(title) = self.prompt("Enter title to delete: ")? else {
                    return Ok(Flow::Stop);
                };
                match registry.delete_by_title(&title) {
                    Ok(_) => self.success("Song deleted.")?,
                    Err(err) => self.failure(&err)?,
                }
            }
            Choice::Search => {
                let Some(title) = self.prompt("Enter title to search: ")? else {
                    return Ok(Flow::Stop);
                };
                match registry.find_by_title(&title) {
                    Ok(position) => {
                        self.success(&format!("Song found at position {}.", position))?
                    }
                    Err(err) => self.failure(&err)?,
                }
            }
            Choice::Display => self.display(registry)?,
            Choice::Count => {
                writeln!(
                    self.output,
                    "{}{}",
                    "Total songs: ".green(),
                    registry.count().to_string().green().bold()
                )?;
            }
            Choice::PlayNext => match registry.play_next() {
                Ok(report) => write_now_playing(&mut self.output, &report)?,
                Err(err) => self.failure(&err)?,
            },
            Choice::ResetPlay => {
                registry.reset_playback();
                self.success("Playback reset to start.")?;
            }
            Choice::PlayPrevious => match registry.play_previous() {
                Ok(Some(report)) => write_now_playing(&mut self.output, &report)?,
                Ok(None) => writeln!(self.output, "{}", "Already at first song.".red())?,
                Err(err) => self.failure(&err)?,
            },
            Choice::JumpTo => {
                let Some(pos) = self.prompt("Enter position: ")? else {
                    return Ok(Flow::Stop);
                };
                let Some(pos) = self.parse_position(&pos)? else {
                    return Ok(Flow::Continue);
                };
                match registry.play_at(pos) {
                    Ok(report) => write_now_playing(&mut self.output, &report)?,
                    Err(err) => self.failure(&err)?,
                }
            }
            Choice::DeleteAt => {
                let Some(pos) = self.prompt("Enter position to delete: ")? else {
                    return Ok(Flow::Stop);
                };
                let Some(pos) = self.parse_position(&pos)? else {
                    return Ok(Flow::Continue);
                };
                match registry.delete_at(pos) {
                    Ok(song) => self.success(&format!("Song deleted: {}", song))?,
                    Err(err) => self.failure(&err)?,
                }
            }
            Choice::Find => {
                let Some(query) = self.prompt("Enter text to find: ")? else {
                    return Ok(Flow::Stop);
                };
                let hits = registry.search(&query);
                if hits.is_empty() {
                    writeln!(self.output, "{}", "No songs matched.".red())?;
                }
                for entry in hits {
                    writeln!(
                        self.output,
                        "{}. {}",
                        entry.position,
                        entry.song.to_string().cyan()
                    )?;
                }
            }
            Choice::Export => {
                let export = PlaylistExport::from_registry(&self.playlist_name, registry);
                match export.to_json() {
                    Ok(json) => writeln!(self.output, "{}", json)?,
                    Err(err) => {
                        error!("[!] failed to serialize playlist: {}", err);
                        writeln!(self.output, "{}", "Export failed.".red())?;
                    }
                }
            }
            Choice::Exit => {
                writeln!(self.output, "{}", "Exiting...".yellow())?;
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let header = format!("--- {} ---", self.playlist_name);
        writeln!(self.output)?;
        writeln!(self.output, "{}", header.cyan().bold())?;
        for (number, label) in [
            (1, "Add song at end"),
            (2, "Add song at beginning"),
            (3, "Insert song at position"),
            (4, "Delete a song"),
            (5, "Search a song"),
            (6, "Display playlist"),
            (7, "Count songs"),
            (8, "Play next"),
            (9, "Reset play"),
            (10, "Exit"),
        ] {
            writeln!(self.output, "{}. {}", number.to_string().yellow(), label)?;
        }
        writeln!(
            self.output,
            "{}",
            "p. Play previous  j. Jump to position  x. Delete at position  f. Find  e. Export JSON"
                .dimmed()
        )?;
        Ok(())
    }

    fn display(&mut self, registry: &SongRegistry) -> io::Result<()> {
        let listing = match registry.list() {
            Ok(listing) => listing,
            Err(err) => return self.failure(&err),
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", "--- Playlist ---".green().bold())?;
        for entry in listing {
            // alternate row colors, easier on the eyes for long playlists
            let color = if entry.position % 2 == 1 { "cyan" } else { "magenta" };
            writeln!(
                self.output,
                "{}. {}",
                entry.position,
                entry.song.to_string().color(color)
            )?;
        }
        writeln!(self.output, "{}", "----------------".green().bold())?;
        Ok(())
    }

    // Write `label`, read one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_song(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(None);
        };
        let Some(artist) = self.prompt("Enter artist: ")? else {
            return Ok(None);
        };
        Ok(Some((title, artist)))
    }

    fn parse_position(&mut self, raw: &str) -> io::Result<Option<i64>> {
        match raw.parse::<i64>() {
            Ok(pos) => Ok(Some(pos)),
            Err(_) => {
                debug!("[?] position is not a number: {:?}", raw);
                writeln!(self.output, "{}", "Invalid position.".red())?;
                Ok(None)
            }
        }
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.green())
    }

    fn failure(&mut self, err: &RegistryError) -> io::Result<()> {
        info!("[!] {}", err);
        writeln!(self.output, "{}", describe(err).red())
    }
}

fn describe(err: &RegistryError) -> &'static str {
    match err {
        RegistryError::InvalidPosition { .. } => "Invalid position.",
        RegistryError::PositionOutOfRange { .. } => "Position out of range.",
        RegistryError::EmptyRegistry => "Playlist is empty.",
        RegistryError::NotFound { .. } => "Song not found.",
    }
}

fn write_now_playing<W: Write>(output: &mut W, report: &NowPlaying<'_>) -> io::Result<()> {
    writeln!(
        output,
        "{}{}",
        "Now playing: ".green(),
        report.song.to_string().yellow().bold()
    )?;
    if report.end_reached {
        writeln!(output, "{}", "You reached the end of playlist.".red())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(registry: &mut SongRegistry, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Console::new(script.as_bytes(), &mut output, "Test Playlist")
            .run(registry)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!(Choice::parse("1"), Some(Choice::AddEnd));
        assert_eq!(Choice::parse(" 10 \n"), Some(Choice::Exit));
        assert_eq!(Choice::parse("P"), Some(Choice::PlayPrevious));
        assert_eq!(Choice::parse("0"), None);
        assert_eq!(Choice::parse("11"), None);
        assert_eq!(Choice::parse("abc"), None);
    }

    #[test]
    fn test_add_and_display() {
        let mut registry = SongRegistry::new();
        let output = run_script(
            &mut registry,
            "1\nA\nX\n1\nB\nY\n3\nC\nZ\n2\n6\n10\n",
        );

        assert!(output.contains("--- Test Playlist ---"));
        assert!(output.contains("Song added as first song."));
        assert!(output.contains("Song added to end."));
        assert!(output.contains("Song inserted at position 2."));
        assert!(output.contains("1. A - X\n2. C - Z\n3. B - Y\n"));
        assert!(output.ends_with("Exiting...\n"));
        assert_eq!(registry.count(), 3);
    }

    #[test]
    fn test_titles_may_contain_spaces() {
        let mut registry = SongRegistry::new();
        run_script(&mut registry, "2\nBlue Monday\nNew Order\n10\n");
        assert_eq!(registry.songs()[0].title(), "Blue Monday");
        assert_eq!(registry.songs()[0].artist(), "New Order");
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let mut registry = SongRegistry::new();
        let output = run_script(&mut registry, "42\nhello\n7\n10\n");
        assert_eq!(output.matches("Invalid choice!").count(), 2);
        assert!(output.contains("Total songs: 0"));
        assert!(output.contains("Exiting..."));
    }

    #[test]
    fn test_insert_errors() {
        let mut registry = SongRegistry::new();
        let output = run_script(
            &mut registry,
            "3\nA\nX\n0\n3\nA\nX\n5\n3\nA\nX\nfive\n10\n",
        );
        assert!(output.contains("Invalid position."));
        assert!(output.contains("Position out of range."));
        assert_eq!(output.matches("Invalid position.").count(), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_delete_and_search() {
        let mut registry = SongRegistry::new();
        registry.add_end("A", "X");
        registry.add_end("B", "Y");

        let output = run_script(&mut registry, "5\nB\n4\nA\n4\nQ\n5\nA\n10\n");
        assert!(output.contains("Song found at position 2."));
        assert!(output.contains("Song deleted."));
        assert_eq!(output.matches("Song not found.").count(), 2);
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_empty_playlist_messages() {
        let mut registry = SongRegistry::new();
        let output = run_script(&mut registry, "4\nA\n6\n8\n10\n");
        assert_eq!(output.matches("Playlist is empty.").count(), 3);
    }

    #[test]
    fn test_play_next_and_reset() {
        let mut registry = SongRegistry::new();
        registry.add_end("A", "X");
        registry.add_end("B", "Y");

        let output = run_script(&mut registry, "8\n8\n8\n9\n8\n10\n");
        let played: Vec<&str> = output
            .lines()
            .filter_map(|line| line.split("Now playing: ").nth(1))
            .collect();
        assert_eq!(played, vec!["A - X", "A - X", "B - Y", "A - X"]);
        assert_eq!(output.matches("You reached the end of playlist.").count(), 1);
        assert!(output.contains("Playback reset to start."));
    }

    #[test]
    fn test_lettered_extras() {
        let mut registry = SongRegistry::new();
        registry.add_end("Blue Monday", "New Order");
        registry.add_end("Temptation", "New Order");
        registry.add_end("Intro", "The xx");

        let output = run_script(&mut registry, "p\nj\n3\np\nf\nnew order\nx\n1\ne\n10\n");
        assert!(output.contains("Already at first song."));
        assert!(output.contains("Now playing: Intro - The xx"));
        assert!(output.contains("Now playing: Temptation - New Order"));
        assert!(output.contains("1. Blue Monday - New Order\n2. Temptation - New Order\n"));
        assert!(output.contains("Song deleted: Blue Monday - New Order"));
        assert!(output.contains("\"name\": \"Test Playlist\""));
        assert!(output.contains("\"length\": 2"));
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_end_of_input_stops_the_loop() {
        let mut registry = SongRegistry::new();
        let output = run_script(&mut registry, "1\nA\n");
        assert!(!output.contains("Exiting..."));
        assert!(registry.is_empty());

        let output = run_script(&mut registry, "");
        assert!(output.ends_with("Enter your choice: "));
    }
}
