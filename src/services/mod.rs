//! Application services layer.
//!
//! Services hold the business logic that both the TUI screens and the CLI
//! commands drive, keeping persistence details out of the UI layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Screens, CLI commands)                   │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │               Services Layer                    │
//! │  ┌─────────────┐                                │
//! │  │ DeckService │                                │
//! │  └─────────────┘                                │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────┐
//! │             Infrastructure Layer                │
//! │  (CardStore, CardEditor, Config)                │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod deck_service;

pub use deck_service::{DeckService, SubmitOutcome};
