//! Error types for deck operations.

use thiserror::Error;

/// Which side of a flashcard failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Question,
    Answer,
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardField::Question => write!(f, "question"),
            CardField::Answer => write!(f, "answer"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DeckError {
    /// A question or answer was empty after trimming.
    #[error("The {field} must not be empty")]
    Validation { field: CardField },

    /// An edit or delete referenced a position outside the card list.
    #[error("Card index {index} is out of range (deck has {len} cards)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The card at this position was changed in storage by someone else
    /// since it was last read.
    #[error("Flashcard #{} was changed elsewhere; the list has been refreshed", .index + 1)]
    CardChanged { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;

impl DeckError {
    /// True for errors caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DeckError::Validation { .. }
                | DeckError::IndexOutOfRange { .. }
                | DeckError::CardChanged { .. }
        )
    }
}
