//! Shared pieces for CLI commands: the loaded context, output markers, and
//! the confirmation prompt.

use crate::config::Config;
use crate::services::DeckService;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Configuration plus the deck it points at.
pub struct CliContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub deck: DeckService,
}

impl CliContext {
    /// Load the config from its default location and open the deck.
    pub fn load() -> Result<Self> {
        let config_path = crate::utils::get_config_path();
        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        let deck = DeckService::open(config.store());
        Ok(Self {
            config,
            config_path,
            deck,
        })
    }
}

/// Write a success message with a checkmark prefix.
pub fn write_success(out: &mut dyn Write, msg: &str) -> io::Result<()> {
    writeln!(out, "\u{2713} {}", msg)
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning sign prefix.
pub fn print_warning(msg: &str) {
    println!("\u{26A0}\u{FE0F} {}", msg);
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` means no.
pub fn prompt_confirm(message: &str) -> Result<bool> {
    print!("{} [y/N]: ", message);
    io::stdout().flush().context("Failed to flush stdout")?;
    read_confirm(&mut io::stdin().lock())
}

fn read_confirm(input: &mut dyn BufRead) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
