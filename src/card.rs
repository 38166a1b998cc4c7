//! The flashcard data model.

use crate::error::{CardField, DeckError, Result};
use serde::{Deserialize, Serialize};

/// A question/answer pair.
///
/// Cards have no identifier of their own: a card's position in the deck
/// is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    /// Build a card from raw form input.
    ///
    /// Both sides are trimmed and must be non-empty afterwards.
    pub fn new(question: &str, answer: &str) -> Result<Self> {
        let question = question.trim();
        let answer = answer.trim();

        if question.is_empty() {
            return Err(DeckError::Validation {
                field: CardField::Question,
            });
        }
        if answer.is_empty() {
            return Err(DeckError::Validation {
                field: CardField::Answer,
            });
        }

        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }

    /// Text shown for the given face of the card.
    pub fn face(&self, flipped: bool) -> &str {
        if flipped {
            &self.answer
        } else {
            &self.question
        }
    }
}
