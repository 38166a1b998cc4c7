use crate::components::HelpOverlay;
use crate::config::Config;
use crate::screens::{
    CreateScreen, HomeScreen, PracticeScreen, RenderContext, Screen, ScreenAction, ScreenContext,
};
use crate::services::DeckService;
use crate::tui::Tui;
use crate::ui::Screen as ScreenId;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::Frame;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Main application state: the deck, one instance of each screen, and the
/// router deciding which screen is current.
pub struct App {
    config: Config,
    config_path: PathBuf,
    deck: DeckService,
    current: ScreenId,
    home: HomeScreen,
    create: CreateScreen,
    practice: PracticeScreen,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf, deck: DeckService) -> Self {
        let practice = PracticeScreen::new(config.shuffle_on_start);
        Self {
            config,
            config_path,
            deck,
            current: ScreenId::Home,
            home: HomeScreen::new(),
            create: CreateScreen::new(),
            practice,
            show_help: false,
            should_quit: false,
        }
    }

    /// Replace the practice screen, e.g. with one using a seeded RNG.
    pub fn with_practice_screen(mut self, practice: PracticeScreen) -> Self {
        self.practice = practice;
        self
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn deck(&self) -> &DeckService {
        &self.deck
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        info!("TUI started");

        while !self.should_quit {
            let mut drawn = Ok(());
            tui.terminal_mut().draw(|frame| drawn = self.draw(frame))?;
            drawn?;

            if let Some(event) = tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        tui.exit()?;
        info!("TUI exited");
        Ok(())
    }

    /// Draw the current screen, plus the help overlay when open.
    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config, &self.deck);
        let screen: &mut dyn Screen = match self.current {
            ScreenId::Home => &mut self.home,
            ScreenId::Create => &mut self.create,
            ScreenId::Practice => &mut self.practice,
        };
        screen.render(frame, area, &ctx)?;

        if self.show_help {
            let config_path = self.config_path.display().to_string();
            HelpOverlay::render(frame, area, &self.config.keymap, &config_path);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if self.show_help {
            if matches!(event, Event::Key(_)) {
                self.show_help = false;
            }
            return Ok(());
        }

        let action = self.with_screen(self.current, |screen, ctx| screen.handle_event(event, ctx))?;
        self.apply(action)
    }

    fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(target) => self.navigate(target)?,
            ScreenAction::ShowHelp => self.show_help = true,
            ScreenAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        Ok(())
    }

    fn navigate(&mut self, target: ScreenId) -> Result<()> {
        if target == self.current {
            return Ok(());
        }
        debug!("Navigating {:?} -> {:?}", self.current, target);
        self.with_screen(self.current, |screen, ctx| screen.on_exit(ctx))?;
        self.current = target;
        // Pick up anything the CLI wrote while this session was open
        self.deck.reload();
        self.with_screen(target, |screen, ctx| screen.on_enter(ctx))
    }

    fn with_screen<T>(
        &mut self,
        id: ScreenId,
        f: impl FnOnce(&mut dyn Screen, &mut ScreenContext) -> Result<T>,
    ) -> Result<T> {
        let mut ctx = ScreenContext::new(&self.config, &mut self.deck);
        let screen: &mut dyn Screen = match id {
            ScreenId::Home => &mut self.home,
            ScreenId::Create => &mut self.create,
            ScreenId::Practice => &mut self.practice,
        };
        f(screen, &mut ctx)
    }
}
