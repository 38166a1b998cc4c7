//! Theme and style system
//!
//! A global palette read by every widget. Dark, light, and no-color
//! variants; no-color styles use modifiers only and never set fg/bg.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Selection indicator for menus and card lists
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Install the global theme. Safe to call again at runtime.
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *theme = Theme::new(theme_type);
}

/// Current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Set by `NO_COLOR` or `--no-colors`
    NoColor,
}

impl ThemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::NoColor => "nocolor",
        }
    }
}

impl FromStr for ThemeType {
    type Err = ();

    /// Unknown names fall back to dark.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" | "none" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Titles, focused borders, the selected menu entry
    pub accent: Color,
    /// Question side of a card
    pub card_front: Color,
    /// Answer side of a card
    pub card_back: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,
    pub text_emphasis: Color,

    pub border: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            accent: Color::Cyan,
            card_front: Color::Cyan,
            card_back: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            highlight_bg: Color::DarkGray,
        }
    }

    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            accent: Color::Blue,
            card_front: Color::Blue,
            card_back: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            highlight_bg: Color::Gray,
        }
    }

    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            accent: Color::Reset,
            card_front: Color::Reset,
            card_back: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    /// `fg` in color themes, `fallback` modifiers in no-color mode
    fn fg_or(&self, color: Color, fallback: Modifier) -> Style {
        if self.is_plain() {
            Style::default().add_modifier(fallback)
        } else {
            Style::default().fg(color)
        }
    }

    pub fn title_style(&self) -> Style {
        self.fg_or(self.accent, Modifier::empty())
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        self.fg_or(self.text, Modifier::empty())
    }

    pub fn muted_style(&self) -> Style {
        self.fg_or(self.text_muted, Modifier::DIM)
    }

    pub fn emphasis_style(&self) -> Style {
        self.fg_or(self.text_emphasis, Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        self.fg_or(self.success, Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        self.fg_or(self.warning, Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        self.fg_or(self.error, Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn border_focused_style(&self) -> Style {
        self.fg_or(self.accent, Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        self.fg_or(self.border, Modifier::empty())
    }

    /// Border and label color for a card showing the given side
    pub fn card_style(&self, flipped: bool) -> Style {
        let color = if flipped { self.card_back } else { self.card_front };
        self.fg_or(color, Modifier::BOLD)
    }

    /// Selected row in a list or menu
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("Light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("solarized".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for style in [
            t.highlight_style(),
            t.card_style(true),
            t.error_style(),
            t.title_style(),
        ] {
            assert!(style.fg.is_none());
            assert!(style.bg.is_none());
        }
    }

    #[test]
    fn test_card_sides_differ() {
        let t = Theme::dark();
        assert_ne!(t.card_style(false), t.card_style(true));
    }
}
