use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Common header for all screens
pub struct Header;

impl Header {
    /// Rows a header needs: border, title line, description, border
    pub const HEIGHT: u16 = 4;

    /// Render a bordered header with the screen title on the border and a
    /// short description inside.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" flashdeck - {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let description = Paragraph::new(description)
            .style(t.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(description, inner);
    }
}
