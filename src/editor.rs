//! Editor cursor: whether the card form creates a new card or replaces an
//! existing one.

use crate::card::Flashcard;
use crate::error::{DeckError, Result};

/// Tracks which card, if any, the form is editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardEditor {
    cursor: Option<usize>,
}

impl CardEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` in create mode, `Some(index)` in edit mode.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_editing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Switch to create mode.
    pub fn begin_create(&mut self) {
        self.cursor = None;
    }

    /// Switch to edit mode for the card at `index`.
    pub fn begin_edit(&mut self, index: usize, cards: &[Flashcard]) -> Result<()> {
        if index >= cards.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: cards.len(),
            });
        }
        self.cursor = Some(index);
        Ok(())
    }

    /// Leave edit mode without touching the deck.
    pub fn cancel_edit(&mut self) {
        self.cursor = None;
    }

    /// Apply the form to `cards`: append in create mode, replace in edit mode.
    ///
    /// On success the editor always returns to create mode. On failure
    /// neither the deck nor the cursor change.
    pub fn submit(
        &mut self,
        question: &str,
        answer: &str,
        cards: &mut Vec<Flashcard>,
    ) -> Result<usize> {
        let card = Flashcard::new(question, answer)?;

        let index = match self.cursor {
            Some(index) => {
                let len = cards.len();
                let slot = cards
                    .get_mut(index)
                    .ok_or(DeckError::IndexOutOfRange { index, len })?;
                *slot = card;
                index
            }
            None => {
                cards.push(card);
                cards.len() - 1
            }
        };

        self.cursor = None;
        Ok(index)
    }

    /// Remove the card at `index`, shifting later cards down.
    ///
    /// The cursor is cleared unconditionally: any index it held may now
    /// point at a different card or past the end.
    pub fn delete(&mut self, index: usize, cards: &mut Vec<Flashcard>) -> Result<Flashcard> {
        if index >= cards.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: cards.len(),
            });
        }
        let removed = cards.remove(index);
        self.cursor = None;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Vec<Flashcard> {
        vec![
            Flashcard::new("A", "1").unwrap(),
            Flashcard::new("B", "2").unwrap(),
        ]
    }

    #[test]
    fn test_submit_in_create_mode_appends() {
        let mut editor = CardEditor::new();
        let mut cards = deck();
        let index = editor.submit("C", "3", &mut cards).unwrap();
        assert_eq!(index, 2);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].question, "C");
    }

    #[test]
    fn test_submit_in_edit_mode_replaces_and_clears_cursor() {
        let mut editor = CardEditor::new();
        let mut cards = deck();
        editor.begin_edit(1, &cards).unwrap();
        assert_eq!(editor.cursor(), Some(1));

        editor.submit("B2", "22", &mut cards).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1], Flashcard::new("B2", "22").unwrap());
        assert_eq!(editor.cursor(), None);

        // A second submit appends rather than editing again
        editor.submit("C", "3", &mut cards).unwrap();
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn test_begin_edit_out_of_range() {
        let mut editor = CardEditor::new();
        let err = editor.begin_edit(2, &deck()).unwrap_err();
        assert!(matches!(err, DeckError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(editor.cursor(), None);
    }

    #[test]
    fn test_invalid_submit_keeps_state() {
        let mut editor = CardEditor::new();
        let mut cards = deck();
        editor.begin_edit(0, &cards).unwrap();

        assert!(editor.submit(" ", "1", &mut cards).is_err());
        assert_eq!(cards, deck());
        assert_eq!(editor.cursor(), Some(0));
    }

    #[test]
    fn test_submit_with_cursor_past_end_fails() {
        let mut editor = CardEditor::new();
        let mut cards = deck();
        editor.begin_edit(1, &cards).unwrap();
        cards.truncate(1);

        let err = editor.submit("B2", "22", &mut cards).unwrap_err();
        assert!(matches!(err, DeckError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(cards.len(), 1);
        assert_eq!(editor.cursor(), Some(1));
    }

    #[test]
    fn test_delete_clears_stale_cursor() {
        let mut editor = CardEditor::new();
        let mut cards = deck();
        editor.begin_edit(1, &cards).unwrap();

        let removed = editor.delete(0, &mut cards).unwrap();
        assert_eq!(removed.question, "A");
        assert_eq!(cards, vec![Flashcard::new("B", "2").unwrap()]);
        assert_eq!(editor.cursor(), None);
    }

    #[test]
    fn test_cancel_edit() {
        let mut editor = CardEditor::new();
        let cards = deck();
        editor.begin_edit(0, &cards).unwrap();
        editor.cancel_edit();
        assert!(!editor.is_editing());
        editor.begin_edit(1, &cards).unwrap();
        editor.begin_create();
        assert!(!editor.is_editing());
    }
}
