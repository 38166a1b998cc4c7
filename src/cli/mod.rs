//! Command-line interface.
//!
//! With no subcommand the binary launches the TUI; every subcommand works
//! on the same card file without taking over the terminal.

mod commands;
mod common;
pub mod completions;

pub use commands::run;
pub use common::*;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Create, edit, and practice flashcards from the terminal
#[derive(Parser, Debug)]
#[command(name = "flashdeck", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a flashcard
    Add {
        /// Question side
        question: String,
        /// Answer side
        answer: String,
    },
    /// List all flashcards
    List {
        /// Show answers too
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show one flashcard
    Show {
        /// Card number as shown by `list`
        number: usize,
        /// Print the card as an HTML fragment
        #[arg(long)]
        html: bool,
    },
    /// Replace the question and answer of a flashcard
    Edit {
        /// Card number as shown by `list`
        number: usize,
        question: String,
        answer: String,
    },
    /// Delete a flashcard
    Delete {
        /// Card number as shown by `list`
        number: usize,
    },
    /// Delete all flashcards
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Configuration file location
    Config,
    /// Log file location
    Logs,
    /// Card file location
    Storage,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL if omitted)
        #[arg(value_enum)]
        shell: Option<Shell>,
    },
}
