use crate::keymap::Action;
use crossterm::event::KeyCode;

/// A single-line text field: the text plus a cursor counted in characters.
///
/// # Example
/// ```
/// use flashdeck::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_text(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `char_pos` (or the end).
    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle a raw key. Returns true if the key edited or moved the cursor.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Handle a keymap action. Returns true if it applied to the input.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Whether an action should still fire while a text field has focus.
    ///
    /// Everything else is suppressed so its key can be typed as text
    /// (e.g. `q` is Quit in lists but a letter in a question).
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextField
                | Action::PrevField
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("hello");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('x');
        assert_eq!(input.text(), "hexllo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_unicode_editing() {
        let mut input = TextInput::with_text("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.backspace();
        assert_eq!(input.text(), "hllo");
        input.insert_char('ü');
        assert_eq!(input.text(), "hüllo");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("abc");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete() {
        let mut input = TextInput::with_text("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "bc");
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "bc");
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\u{1b}');
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_handle_key() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyCode::Char('a')));
        assert!(input.handle_key(KeyCode::Char('b')));
        assert!(input.handle_key(KeyCode::Backspace));
        assert_eq!(input.text(), "a");
        assert!(!input.handle_key(KeyCode::Enter));
    }

    #[test]
    fn test_handle_action() {
        let mut input = TextInput::with_text("hello");
        assert!(input.handle_action(Action::Home));
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "ello");
        assert!(!input.handle_action(Action::Shuffle));
    }

    #[test]
    fn test_is_blank() {
        assert!(TextInput::with_text("   ").is_blank());
        assert!(!TextInput::with_text(" a ").is_blank());
    }

    #[test]
    fn test_is_action_allowed_when_focused() {
        assert!(TextInput::is_action_allowed_when_focused(&Action::Confirm));
        assert!(TextInput::is_action_allowed_when_focused(&Action::NextField));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Quit));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Delete));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Flip));
    }
}
