use crate::utils::{
    focused_border_style, input_placeholder_style, input_text_style, unfocused_border_style,
    TextInput,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common single-line input field
pub struct InputField;

impl InputField {
    pub const HEIGHT: u16 = 3;

    /// Render a bordered input and, when focused, place the terminal cursor.
    ///
    /// Text wider than the field scrolls so the cursor stays visible.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        input: &TextInput,
        focused: bool,
        title: &str,
        placeholder: &str,
    ) {
        let border_style = if focused {
            focused_border_style()
        } else {
            unfocused_border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(border_style);
        let inner = block.inner(area);

        let width = inner.width.max(1) as usize;
        let scroll = (input.cursor() + 1).saturating_sub(width);
        let paragraph = if input.text().is_empty() {
            Paragraph::new(placeholder).style(input_placeholder_style())
        } else {
            let visible: String = input.text().chars().skip(scroll).take(width).collect();
            Paragraph::new(visible).style(input_text_style())
        };
        frame.render_widget(paragraph.block(block), area);

        if focused {
            let x = inner.x + (input.cursor() - scroll).min(width.saturating_sub(1)) as u16;
            frame.set_cursor_position((x, inner.y));
        }
    }
}
