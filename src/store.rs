//! Card repository: persistence of the card list.
//!
//! The whole deck is stored as one aggregate under a single storage key.
//! On disk that is `<data_dir>/<key>.json`, holding a JSON array of
//! `{ "question": ..., "answer": ... }` objects.

use crate::card::Flashcard;
use crate::error::Result;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Load/save/clear contract for the persisted card list.
pub trait CardStore {
    /// Return the persisted list.
    ///
    /// Never fails: a missing or unreadable store yields an empty list.
    fn load(&self) -> Vec<Flashcard>;

    /// Replace the persisted list.
    fn save(&self, cards: &[Flashcard]) -> Result<()>;

    /// Remove all persisted data. A later `load` returns an empty list.
    fn clear(&self) -> Result<()>;
}

/// Decode stored JSON, treating anything malformed as an empty deck.
fn decode_cards(content: &str, origin: &Path) -> Vec<Flashcard> {
    if content.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Flashcard>>(content) {
        Ok(cards) => cards,
        Err(e) => {
            warn!("Ignoring corrupt card store {:?}: {}", origin, e);
            Vec::new()
        }
    }
}

/// File-backed store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store the deck under `key` inside `data_dir`.
    pub fn new(data_dir: &Path, key: &str) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "flashcards.json".to_string());
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}

impl CardStore for JsonFileStore {
    fn load(&self) -> Vec<Flashcard> {
        match fs::read_to_string(&self.path) {
            Ok(content) => decode_cards(&content, &self.path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!("Failed to read card store {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    fn save(&self, cards: &[Flashcard]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(cards)?;

        // Write beside the target and rename over it so readers never see
        // a half-written file.
        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, content).and_then(|()| fs::rename(&temp, &self.path)) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        debug!("Saved {} cards to {:?}", cards.len(), self.path);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store holding the serialised JSON, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored text, which may be malformed.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            content: RefCell::new(Some(raw.to_string())),
        }
    }

    /// The raw stored text, if any.
    pub fn raw(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl CardStore for MemoryStore {
    fn load(&self) -> Vec<Flashcard> {
        self.content
            .borrow()
            .as_deref()
            .map(|raw| decode_cards(raw, Path::new("<memory>")))
            .unwrap_or_default()
    }

    fn save(&self, cards: &[Flashcard]) -> Result<()> {
        let content = serde_json::to_string(cards)?;
        *self.content.borrow_mut() = Some(content);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.content.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Flashcard> {
        vec![
            Flashcard::new("A", "1").unwrap(),
            Flashcard::new("B", "2").unwrap(),
        ]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path(), "flashcards");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path(), "flashcards");

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());
        assert!(temp_dir.path().join("flashcards.json").exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_save_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(&temp_dir.path().join("nested/data"), "deck");
        store.save(&sample()).unwrap();
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path(), "flashcards");
        // A non-empty directory where the card file should go makes the rename fail
        fs::create_dir_all(store.path().join("blocker")).unwrap();

        assert!(store.save(&sample()).is_err());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path(), "flashcards");
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());

        fs::write(store.path(), r#"{"question":"A","answer":"1"}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path(), "flashcards");
        store.save(&sample()).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_empty());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path(), "flashcards");
        store.save(&sample()).unwrap();

        let first = store.load();
        store.save(&first).unwrap();
        assert_eq!(store.load(), first);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_raw("garbage");
        assert!(store.load().is_empty());

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());

        store.clear().unwrap();
        assert!(store.raw().is_none());
        assert!(store.load().is_empty());
    }
}
