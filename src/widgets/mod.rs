// Reusable UI widgets

pub mod dialog;
pub mod flashcard;
pub mod menu;

pub use dialog::{Dialog, DialogVariant};
pub use flashcard::FlashcardView;
pub use menu::{Menu, MenuItem, MenuState};
