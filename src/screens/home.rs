//! Home screen: the entry menu.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::ui::Screen as ScreenId;
use crate::utils::{center_popup, create_standard_layout};
use crate::widgets::{Menu, MenuItem, MenuState};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeEntry {
    Create,
    Practice,
    Quit,
}

const ENTRIES: [HomeEntry; 3] = [HomeEntry::Create, HomeEntry::Practice, HomeEntry::Quit];

pub struct HomeScreen {
    state: MenuState,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        let mut state = MenuState::new();
        state.select(Some(0));
        Self { state }
    }

    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    fn move_by(&mut self, forward: bool) {
        let len = ENTRIES.len();
        let current = self.selected();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.state.select(Some(next));
    }

    fn activate(&self) -> ScreenAction {
        match ENTRIES[self.selected()] {
            HomeEntry::Create => ScreenAction::Navigate(ScreenId::Create),
            HomeEntry::Practice => ScreenAction::Navigate(ScreenId::Practice),
            HomeEntry::Quit => ScreenAction::Quit,
        }
    }

    fn items(card_count: usize) -> Vec<MenuItem> {
        let cards = match card_count {
            1 => "1 card".to_string(),
            n => format!("{} cards", n),
        };
        vec![
            MenuItem::new("Create Flashcards").info(cards),
            MenuItem::new("Practice Mode"),
            MenuItem::new("Quit"),
        ]
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header, ScreenId::Home.title(), ScreenId::Home.description());

        let menu = Menu::new(Self::items(ctx.deck.len()));
        let menu_area = center_popup(content, 44.min(content.width), menu.height());
        frame.render_stateful_widget(menu, menu_area, &mut self.state);

        Footer::render(frame, footer, &ctx.config.keymap.footer_home());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };

        let action = match ctx.config.keymap.get_action(key.code, key.modifiers) {
            Some(Action::MoveUp) => {
                self.move_by(false);
                ScreenAction::None
            }
            Some(Action::MoveDown) => {
                self.move_by(true);
                ScreenAction::None
            }
            Some(Action::Confirm) => self.activate(),
            Some(Action::Create) => ScreenAction::Navigate(ScreenId::Create),
            Some(Action::Help) => ScreenAction::ShowHelp,
            Some(Action::Quit) | Some(Action::Cancel) => ScreenAction::Quit,
            _ => ScreenAction::None,
        };
        Ok(action)
    }
}
