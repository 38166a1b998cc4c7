//! flashdeck - create, edit, and practice flashcards in the terminal
//!
//! The deck is a list of question/answer cards persisted as one JSON file.
//! The same deck is driven by a three-screen TUI (home, create, practice)
//! and by one-shot CLI subcommands.

// Domain
pub mod card;
pub mod editor;
pub mod error;
pub mod practice;
pub mod services;
pub mod store;

// Interface
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

pub use app::App;
pub use card::Flashcard;
pub use config::Config;
pub use error::{CardField, DeckError};
pub use practice::{PracticeSession, SessionState};
pub use services::{DeckService, SubmitOutcome};
pub use store::{CardStore, JsonFileStore, MemoryStore};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
