//! A single flashcard drawn as a bordered box showing one side.

use crate::card::Flashcard;
use crate::styles::theme;
use crate::utils::sanitize_for_terminal;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap};

pub struct FlashcardView<'a> {
    card: &'a Flashcard,
    flipped: bool,
    hint: Option<&'a str>,
}

impl<'a> FlashcardView<'a> {
    pub fn new(card: &'a Flashcard, flipped: bool) -> Self {
        Self {
            card,
            flipped,
            hint: None,
        }
    }

    /// Text shown under the card body, e.g. "Space: flip"
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    fn side_label(&self) -> &'static str {
        if self.flipped {
            " Answer "
        } else {
            " Question "
        }
    }
}

impl Widget for FlashcardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let style = t.card_style(self.flipped);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(self.side_label())
            .title_style(style)
            .padding(Padding::uniform(1));
        if let Some(hint) = self.hint {
            block = block.title_bottom(Line::styled(format!(" {} ", hint), t.muted_style()).centered());
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let text = sanitize_for_terminal(self.card.face(self.flipped));
        let rows = text
            .lines()
            .map(|l| (l.chars().count().max(1) as u16).div_ceil(inner.width.max(1)))
            .sum::<u16>();
        let top = inner.height.saturating_sub(rows) / 2;
        let body = Rect {
            y: inner.y + top,
            height: inner.height - top,
            ..inner
        };

        Paragraph::new(text)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }
}
