//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(preset: KeymapPreset) -> Self {
        Self {
            preset,
            overrides: Vec::new(),
        }
    }

    /// Get the action for a key event, checking overrides first then preset.
    /// An overridden action loses all of its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Effective bindings: overrides first, then preset bindings for actions
    /// that have no override
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Override keys that fail to parse, for reporting at startup
    pub fn invalid_overrides(&self) -> Vec<(String, String)> {
        self.overrides
            .iter()
            .filter_map(|b| b.parse().err().map(|e| (b.key.clone(), e)))
            .collect()
    }

    /// Display string for the first key bound to `action`
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// "↑/↓" style pair for two actions
    fn pair_display(&self, first: Action, second: Action) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(first),
            self.get_key_display_for_action(second)
        )
    }

    pub fn navigation_display(&self) -> String {
        self.pair_display(Action::MoveUp, Action::MoveDown)
    }

    pub fn card_navigation_display(&self) -> String {
        self.pair_display(Action::MoveLeft, Action::MoveRight)
    }

    pub fn confirm_display(&self) -> String {
        self.get_key_display_for_action(Action::Confirm)
    }

    pub fn quit_display(&self) -> String {
        self.get_key_display_for_action(Action::Quit)
    }

    pub fn cancel_display(&self) -> String {
        self.get_key_display_for_action(Action::Cancel)
    }

    /// Footer for the home menu
    pub fn footer_home(&self) -> String {
        format!(
            "{}: Navigate | {}: Select | {}: Quit | {}: Help",
            self.navigation_display(),
            self.confirm_display(),
            self.quit_display(),
            self.get_key_display_for_action(Action::Help)
        )
    }

    /// Footer for the card form
    pub fn footer_form(&self, editing: bool) -> String {
        let submit = if editing { "Save" } else { "Add" };
        format!(
            "{}: Next field | {}: {} | {}: {}",
            self.get_key_display_for_action(Action::NextField),
            self.confirm_display(),
            submit,
            self.cancel_display(),
            if editing { "Cancel edit" } else { "Back" }
        )
    }

    /// Footer for the card list
    pub fn footer_card_list(&self) -> String {
        format!(
            "{}: Navigate | {}: Flip | {}: Edit | {}: Delete | {}: Reset all | {}: Back",
            self.navigation_display(),
            self.get_key_display_for_action(Action::Flip),
            self.get_key_display_for_action(Action::Edit),
            self.get_key_display_for_action(Action::Delete),
            self.get_key_display_for_action(Action::ResetAll),
            self.cancel_display()
        )
    }

    /// Footer for practice mode
    pub fn footer_practice(&self) -> String {
        format!(
            "{}: Prev/Next | {}: Flip | {}: Shuffle | {}: Back",
            self.card_navigation_display(),
            self.get_key_display_for_action(Action::Flip),
            self.get_key_display_for_action(Action::Shuffle),
            self.cancel_display()
        )
    }
}
