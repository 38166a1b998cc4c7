use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer showing key hints
pub struct Footer;

impl Footer {
    pub const HEIGHT: u16 = 2;

    /// Render hints written as "Label: keys | Label: keys".
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_focused_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Self::hint_line(text)).alignment(Alignment::Center),
            inner,
        );
    }

    /// Style each "keys: label" part, separating parts with a muted bar.
    pub fn hint_line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(keys, t.emphasis_style().add_modifier(Modifier::BOLD)));
                    spans.push(Span::styled(": ", t.muted_style()));
                    spans.push(Span::styled(label, t.text_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }
        Line::from(spans)
    }
}
