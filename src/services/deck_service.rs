//! Deck service: the card list, its store, and the editor cursor together.
//!
//! Screens and CLI commands go through this service so that every change is
//! a single replace-and-save, and so that structural changes always reset
//! the editor cursor.

use crate::card::Flashcard;
use crate::editor::CardEditor;
use crate::error::{DeckError, Result};
use crate::store::CardStore;
use tracing::{info, warn};

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new card was appended at this index.
    Added(usize),
    /// The card at this index was replaced.
    Updated(usize),
}

/// Owns the in-memory deck and keeps it in step with the store.
pub struct DeckService {
    store: Box<dyn CardStore>,
    cards: Vec<Flashcard>,
    editor: CardEditor,
}

impl DeckService {
    /// Open the deck held by `store`.
    pub fn open(store: impl CardStore + 'static) -> Self {
        let cards = store.load();
        info!("Opened deck with {} cards", cards.len());
        Self {
            store: Box::new(store),
            cards,
            editor: CardEditor::new(),
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    /// Re-read the deck from the store.
    ///
    /// Another process (e.g. the CLI while the TUI is open) may have written
    /// the file since it was last read. Edit mode is dropped if the card
    /// being edited is no longer the one at the cursor.
    pub fn reload(&mut self) {
        self.sync();
    }

    /// Replace the cached list with the stored one and return the old list.
    fn sync(&mut self) -> Vec<Flashcard> {
        let previous = std::mem::replace(&mut self.cards, self.store.load());
        if let Some(index) = self.editor.cursor() {
            if self.cards.get(index) != previous.get(index) {
                warn!("Card {} changed in storage, leaving edit mode", index);
                self.editor.cancel_edit();
            }
        }
        previous
    }

    /// Sync, then fail if the card at `index` is not the one the caller
    /// last saw.
    fn sync_at(&mut self, index: usize) -> Result<()> {
        let previous = self.sync();
        if self.cards.get(index) != previous.get(index) {
            warn!("Card {} changed in storage", index);
            return Err(DeckError::CardChanged { index });
        }
        Ok(())
    }

    pub fn editor_cursor(&self) -> Option<usize> {
        self.editor.cursor()
    }

    /// The card being edited, with its index, for populating the form.
    pub fn editing(&self) -> Option<(usize, &Flashcard)> {
        let index = self.editor.cursor()?;
        self.cards.get(index).map(|card| (index, card))
    }

    pub fn begin_create(&mut self) {
        self.editor.begin_create();
    }

    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        self.sync_at(index)?;
        self.editor.begin_edit(index, &self.cards)
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel_edit();
    }

    /// Add or update a card from form input and persist the deck.
    ///
    /// The stored list is re-read first so cards written by another
    /// process are kept.
    pub fn submit(&mut self, question: &str, answer: &str) -> Result<SubmitOutcome> {
        match self.editor.cursor() {
            Some(index) => self.sync_at(index)?,
            None => {
                self.sync();
            }
        }
        let editing = self.editor.cursor().is_some();
        let mut cards = self.cards.clone();
        let mut editor = self.editor;

        let index = editor.submit(question, answer, &mut cards)?;
        self.store.save(&cards)?;

        self.cards = cards;
        self.editor = editor;

        if editing {
            info!("Updated card {}", index);
            Ok(SubmitOutcome::Updated(index))
        } else {
            info!("Added card {}", index);
            Ok(SubmitOutcome::Added(index))
        }
    }

    /// Delete the card at `index` and persist the deck.
    pub fn delete(&mut self, index: usize) -> Result<Flashcard> {
        self.sync_at(index)?;
        let mut cards = self.cards.clone();
        let mut editor = self.editor;
        let removed = editor.delete(index, &mut cards)?;
        self.store.save(&cards)?;
        self.cards = cards;
        self.editor = editor;
        info!("Deleted card {} ({} remaining)", index, self.cards.len());
        Ok(removed)
    }

    /// Remove every card.
    pub fn reset_all(&mut self) -> Result<()> {
        self.store.clear()?;
        self.cards.clear();
        self.editor.cancel_edit();
        info!("Reset all flashcards");
        Ok(())
    }

    /// Convert a one-based card number from user input to an index.
    pub fn index_from_number(&self, number: usize) -> Result<usize> {
        if number == 0 || number > self.cards.len() {
            return Err(DeckError::IndexOutOfRange {
                index: number.saturating_sub(1),
                len: self.cards.len(),
            });
        }
        Ok(number - 1)
    }
}
