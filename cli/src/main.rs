extern crate clap;
extern crate colored;
extern crate log;

#[allow(unused_imports)]
use log::{debug, error, info, warn};

use std::io;

mod banner;
use crate::banner::print_banner;

mod menu;
use crate::menu::Console;

mod models;

use clap::Parser;
use playlistctl_core::SongRegistry;

const DEFAULT_PLAYLIST_NAME: &str = "Music Playlist Manager";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    /// Playlist name shown in the menu header (falls back to PLAYLIST_NAME)
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let playlist_name = match cli.name {
        Some(name) => name,
        None => std::env::var("PLAYLIST_NAME").unwrap_or_else(|_| DEFAULT_PLAYLIST_NAME.to_string()),
    };
    info!("[-] playlist name: {}", playlist_name);

    if !cli.no_banner {
        print_banner();
    }

    // lives for the whole session, dropped on exit
    let mut registry = SongRegistry::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), playlist_name);
    console.run(&mut registry)?;

    debug!("[-] session ended with {} songs", registry.count());
    Ok(())
}
