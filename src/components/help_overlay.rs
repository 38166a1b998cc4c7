//! Help Overlay Component
//!
//! Lists the effective keybindings, grouped by category. Any key closes it.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORY_ORDER: [&str; 6] = [
    "Global",
    "Navigation",
    "Selection",
    "Cards",
    "Editing",
    "Prompts",
];

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();
        let popup = center_popup(
            area,
            (area.width * 9 / 10).min(90),
            (area.height * 9 / 10).min(45),
        );
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Keyboard Shortcuts - {} ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .border_style(t.border_focused_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [bindings_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            bindings_area,
        );

        let footer = Paragraph::new(format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        ))
        .style(t.muted_style())
        .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);
    }

    /// One heading per category followed by "key  description" rows.
    /// Keys bound to the same action are joined, e.g. "Q, Ctrl+C".
    fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut lines = Vec::new();

        for category in CATEGORY_ORDER {
            let mut rows: Vec<(String, String)> = Vec::new();
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                let description = binding.get_description().to_string();
                match rows.iter_mut().find(|(_, d)| *d == description) {
                    Some((keys, _)) => {
                        keys.push_str(", ");
                        keys.push_str(&binding.display());
                    }
                    None => rows.push((binding.display(), description)),
                }
            }
            if rows.is_empty() {
                continue;
            }

            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(format!("  {}", category), t.title_style())));
            for (keys, description) in rows {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:16}", keys), t.emphasis_style()),
                    Span::styled(description, t.text_style()),
                ]));
            }
        }
        lines
    }
}
