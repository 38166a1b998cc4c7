//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Move left (cursor in a field, previous card in practice)
    MoveLeft,
    /// Move right (cursor in a field, next card in practice)
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Selection & Confirmation ============
    /// Confirm selection / submit form
    Confirm,
    /// Cancel / go back
    Cancel,

    // ============ Global ============
    Quit,
    Help,

    // ============ Cards ============
    /// Move focus to the card form
    Create,
    /// Load the selected card into the form
    Edit,
    /// Delete the selected card
    Delete,
    /// Delete every card (asks first)
    ResetAll,
    /// Show the other side of a card
    Flip,
    /// Toggle shuffled practice order
    Shuffle,

    // ============ Form fields ============
    NextField,
    PrevField,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Yes/No prompts ============
    Yes,
    No,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left / previous card",
            Action::MoveRight => "Move right / next card",
            Action::Home => "Start of field",
            Action::End => "End of field",
            Action::Confirm => "Confirm / submit",
            Action::Cancel => "Cancel / go back",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Create => "New card",
            Action::Edit => "Edit card",
            Action::Delete => "Delete card",
            Action::ResetAll => "Reset all flashcards",
            Action::Flip => "Flip card",
            Action::Shuffle => "Shuffle / unshuffle",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::Backspace => "Delete before cursor",
            Action::DeleteChar => "Delete at cursor",
            Action::Yes => "Yes",
            Action::No => "No",
        }
    }

    /// Group name used by the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",
            Action::Confirm | Action::Cancel => "Selection",
            Action::Yes | Action::No => "Prompts",
            Action::Quit | Action::Help => "Global",
            Action::Create
            | Action::Edit
            | Action::Delete
            | Action::ResetAll
            | Action::Flip
            | Action::Shuffle => "Cards",
            Action::NextField | Action::PrevField | Action::Backspace | Action::DeleteChar => {
                "Editing"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Action::ResetAll).unwrap();
        assert_eq!(json, "\"reset_all\"");
        let action: Action = serde_json::from_str("\"shuffle\"").unwrap();
        assert_eq!(action, Action::Shuffle);
    }

    #[test]
    fn test_category() {
        assert_eq!(Action::Flip.category(), "Cards");
        assert_eq!(Action::MoveLeft.category(), "Navigation");
    }
}
