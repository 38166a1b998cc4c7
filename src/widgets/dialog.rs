//! Confirmation dialog widget
//!
//! Centered over the current screen. Renders the message and a Yes/No pair
//! with the selected choice highlighted.

use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    /// Destructive action; red border
    Danger,
}

pub struct Dialog<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub variant: DialogVariant,
    /// Which button is highlighted; true is "Yes"
    pub yes_selected: bool,
    pub width: u16,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self {
            title,
            content,
            variant: DialogVariant::Default,
            yes_selected: false,
            width: 50,
        }
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn yes_selected(mut self, yes: bool) -> Self {
        self.yes_selected = yes;
        self
    }

    pub fn width(mut self, columns: u16) -> Self {
        self.width = columns;
        self
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let inner_width = self.width.saturating_sub(6).max(1) as usize;
        let text_lines = self
            .content
            .lines()
            .map(|l| l.chars().count().max(1).div_ceil(inner_width))
            .sum::<usize>()
            .max(1) as u16;
        // borders + padding + text + blank + buttons
        let popup = center_popup(area, self.width, text_lines + 6);

        Clear.render(popup, buf);

        let border_style = match self.variant {
            DialogVariant::Default => t.border_focused_style(),
            DialogVariant::Danger => t.error_style(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [text_area, _, buttons_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.content)
            .style(t.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        let button = |label: &'static str, selected: bool| {
            if selected {
                Span::styled(format!("[ {} ]", label), t.highlight_style())
            } else {
                Span::styled(format!("  {}  ", label), t.muted_style())
            }
        };
        Paragraph::new(Line::from(vec![
            button("Yes", self.yes_selected),
            Span::raw("   "),
            button("No", !self.yes_selected),
        ]))
        .alignment(Alignment::Center)
        .render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_dialog_shows_message_and_buttons() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        Dialog::new("Reset", "Delete all 3 flashcards?")
            .variant(DialogVariant::Danger)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Delete all 3 flashcards?"));
        assert!(text.contains("Yes"));
        assert!(text.contains("[ No ]"));
    }

    #[test]
    fn test_dialog_fits_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        Dialog::new("Reset", "Are you sure?").render(area, &mut buf);
    }
}
