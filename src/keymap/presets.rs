//! Preset keymaps: Standard, Vim, Emacs
//!
//! Each preset binds every action at least once.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl on top of the standard keys
    Vim,
    /// Ctrl+N/P/B/F on top of the standard keys
    Emacs,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("space", Action::Flip),
        KeyBinding::new("e", Action::Edit),
        KeyBinding::new("d", Action::Delete),
        KeyBinding::new("shift+r", Action::ResetAll),
        KeyBinding::new("s", Action::Shuffle),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("shift+tab", Action::PrevField),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("c", Action::Create),
    ];
    bindings.extend(common_bindings());
    bindings
}

fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("0", Action::Home),
        KeyBinding::new("$", Action::End),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("o", Action::Create),
        KeyBinding::new("x", Action::Delete),
    ];
    bindings.extend(common_bindings());
    bindings
}

fn emacs_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("ctrl+g", Action::Cancel),
        KeyBinding::new("ctrl+x", Action::Quit),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("c", Action::Create),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
    ];
    bindings.extend(common_bindings());
    bindings
}
