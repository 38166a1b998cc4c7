//! Menu widget that renders each entry as a three-line card.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const ITEM_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
    /// Dimmed suffix, e.g. "12 cards"
    pub info: Option<String>,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            info: None,
        }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: Option<usize>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Rows needed to show every item
    pub fn height(&self) -> u16 {
        self.items.len() as u16 * ITEM_HEIGHT
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16 * ITEM_HEIGHT;
            if y + ITEM_HEIGHT > area.y + area.height {
                break;
            }

            let is_selected = state.selected == Some(i);
            let style = if is_selected {
                t.highlight_style()
            } else {
                t.text_style()
            };
            let marker = if is_selected { "▌" } else { " " };
            let marker_style = if is_selected {
                t.border_focused_style().patch(Style::default().bg(t.highlight_bg))
            } else {
                style
            };

            let blank = Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(" ".repeat(area.width.saturating_sub(1) as usize), style),
            ]);
            blank.clone().render(Rect::new(area.x, y, area.width, 1), buf);
            blank.render(Rect::new(area.x, y + 2, area.width, 1), buf);

            let mut spans = vec![
                Span::styled(marker, marker_style),
                Span::styled(" ", style),
                Span::styled(item.text.as_str(), style.add_modifier(Modifier::BOLD)),
            ];
            if let Some(info) = &item.info {
                spans.push(Span::styled(format!("  ({})", info), style.patch(t.muted_style())));
            }
            let used = Line::from(spans.clone()).width();
            if used < area.width as usize {
                spans.push(Span::styled(" ".repeat(area.width as usize - used), style));
            }
            Line::from(spans).render(Rect::new(area.x, y + 1, area.width, 1), buf);
        }
    }
}
