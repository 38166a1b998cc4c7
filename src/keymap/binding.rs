//! KeyBinding struct for mapping keys to actions
//!
//! Key strings look like "j", "down", "ctrl+c", "shift+r".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: Action,
    /// Optional description override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => parsed == normalize(code, modifiers),
            Err(_) => false,
        }
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Display form, e.g. "Ctrl+C"
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Bring a terminal key event into the form produced by `parse_key_string`.
///
/// Terminals report Shift+r as `Char('R')` with SHIFT and `?` with SHIFT on
/// most layouts; bindings are written as "shift+r" and "?".
pub fn normalize(code: KeyCode, modifiers: KeyModifiers) -> ParsedKey {
    match code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => ParsedKey {
            code: KeyCode::Char(c.to_ascii_lowercase()),
            modifiers: modifiers | KeyModifiers::SHIFT,
        },
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => ParsedKey {
            code,
            modifiers: modifiers - KeyModifiers::SHIFT,
        },
        KeyCode::BackTab => ParsedKey {
            code: KeyCode::Tab,
            modifiers: modifiers | KeyModifiers::SHIFT,
        },
        _ => ParsedKey { code, modifiers },
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    // "+" on its own (or as the last part, "ctrl++") is the plus key
    let (prefix, key_part) = match key.strip_suffix("++") {
        Some(prefix) => (prefix, "+"),
        None if key == "+" => ("", "+"),
        None => match key.rsplit_once('+') {
            Some((prefix, last)) => (prefix, last),
            None => ("", key.as_str()),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in prefix.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    let code = parse_key_code(key_part.trim())?;
    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = key.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(format!("Unknown key: {}", key)),
                }
            }
        }
    };
    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+c" -> "Ctrl+C")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backspace" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ => part.to_uppercase(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
