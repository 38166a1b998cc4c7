//! Screen trait and associated types.
//!
//! Each screen owns its view state, renders itself, and turns input events
//! into a `ScreenAction` that the app's router applies.

use crate::config::Config;
use crate::services::DeckService;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only state available while drawing.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub deck: &'a DeckService,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, deck: &'a DeckService) -> Self {
        Self { config, deck }
    }
}

/// State available while handling input. The deck is mutable so screens
/// can submit, delete, and reset cards.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub deck: &'a mut DeckService,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, deck: &'a mut DeckService) -> Self {
        Self { config, deck }
    }
}

/// What the router should do after a screen handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    #[default]
    None,
    Navigate(ScreenId),
    ShowHelp,
    Quit,
}

/// Key presses only; releases and repeats on some terminals are dropped.
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction>;

    /// Called when the router switches to this screen.
    fn on_enter(&mut self, _ctx: &mut ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the router switches away from this screen.
    fn on_exit(&mut self, _ctx: &mut ScreenContext) -> Result<()> {
        Ok(())
    }
}
