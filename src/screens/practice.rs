//! Practice screen: one card at a time, flip to reveal the answer.

use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::practice::{PracticeSession, SessionState};
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::ui::Screen as ScreenId;
use crate::utils::create_standard_layout;
use crate::widgets::FlashcardView;
use anyhow::Result;
use crossterm::event::Event;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const EMPTY_MESSAGE: &str = "No flashcards to practice. Please create some first.";
const CARD_MAX_WIDTH: u16 = 60;
const CARD_MAX_HEIGHT: u16 = 12;

pub struct PracticeScreen {
    session: PracticeSession,
    rng: StdRng,
    /// Showing the answer side. Reset after every move or shuffle.
    flipped: bool,
}

impl PracticeScreen {
    pub fn new(shuffled: bool) -> Self {
        Self::with_rng(shuffled, StdRng::from_entropy())
    }

    /// Use a specific random source, e.g. a seeded one in tests.
    pub fn with_rng(shuffled: bool, rng: StdRng) -> Self {
        Self {
            session: PracticeSession::new(shuffled),
            rng,
            flipped: false,
        }
    }

    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    fn reconcile(&mut self, card_count: usize) -> SessionState {
        self.session.reconcile(card_count, &mut self.rng)
    }

    fn status_line(&self) -> Line<'static> {
        let t = theme();
        let Some((k, n)) = self.session.progress() else {
            return Line::default();
        };
        let mode = if self.session.is_shuffled() {
            "Shuffled"
        } else {
            "In order"
        };
        Line::from(vec![
            Span::styled(format!("Card {} of {}", k, n), t.title_style()),
            Span::styled(format!("   {}", mode), t.muted_style()),
        ])
    }

    fn controls_line(&self, ctx: &RenderContext) -> Line<'static> {
        let t = theme();
        let keymap = &ctx.config.keymap;
        let shuffle_label = if self.session.is_shuffled() {
            "Unshuffle"
        } else {
            "Shuffle"
        };
        Line::from(vec![
            Span::styled(
                format!("{} Previous", keymap.get_key_display_for_action(Action::MoveLeft)),
                t.text_style(),
            ),
            Span::raw("     "),
            Span::styled(
                format!("[{}] {}", keymap.get_key_display_for_action(Action::Shuffle), shuffle_label),
                t.emphasis_style(),
            ),
            Span::raw("     "),
            Span::styled(
                format!("Next {}", keymap.get_key_display_for_action(Action::MoveRight)),
                t.text_style(),
            ),
        ])
    }
}

impl Screen for PracticeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header, ScreenId::Practice.title(), ScreenId::Practice.description());
        Footer::render(frame, footer, &ctx.config.keymap.footer_practice());

        let t = theme();
        if self.reconcile(ctx.deck.len()) == SessionState::Empty {
            let message = Paragraph::new(EMPTY_MESSAGE)
                .style(t.muted_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .areas(content);
            frame.render_widget(message, middle);
            return Ok(());
        }

        let Some(card) = self
            .session
            .current_card_index()
            .and_then(|index| ctx.deck.get(index))
        else {
            return Ok(());
        };

        let [status_area, card_row, controls_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .areas(content);

        frame.render_widget(
            Paragraph::new(self.status_line()).alignment(Alignment::Center),
            status_area,
        );

        let [card_area] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(card_row);
        let [card_area] = Layout::vertical([Constraint::Max(CARD_MAX_HEIGHT)])
            .flex(Flex::Center)
            .areas(card_area);
        let hint = format!(
            "{}: flip",
            ctx.config.keymap.get_key_display_for_action(Action::Flip)
        );
        frame.render_widget(FlashcardView::new(card, self.flipped).hint(&hint), card_area);

        frame.render_widget(
            Paragraph::new(self.controls_line(ctx)).alignment(Alignment::Center),
            controls_area,
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let card_count = ctx.deck.len();
        self.reconcile(card_count);

        let action = match ctx.config.keymap.get_action(key.code, key.modifiers) {
            Some(Action::MoveRight) | Some(Action::MoveDown) => {
                self.session.next();
                self.flipped = false;
                ScreenAction::None
            }
            Some(Action::MoveLeft) | Some(Action::MoveUp) => {
                self.session.prev();
                self.flipped = false;
                ScreenAction::None
            }
            Some(Action::Flip) | Some(Action::Confirm) => {
                if self.session.state() == SessionState::Active {
                    self.flipped = !self.flipped;
                }
                ScreenAction::None
            }
            Some(Action::Shuffle) => {
                self.session.toggle_shuffle(card_count, &mut self.rng);
                self.flipped = false;
                ScreenAction::None
            }
            Some(Action::Cancel) => ScreenAction::Navigate(ScreenId::Home),
            Some(Action::Help) => ScreenAction::ShowHelp,
            Some(Action::Quit) => ScreenAction::Quit,
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn on_enter(&mut self, ctx: &mut ScreenContext) -> Result<()> {
        self.flipped = false;
        self.reconcile(ctx.deck.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::DeckService;
    use crate::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn deck_with(n: usize) -> DeckService {
        let mut deck = DeckService::open(MemoryStore::new());
        for i in 0..n {
            deck.submit(&format!("Q{}", i), &format!("A{}", i)).unwrap();
        }
        deck
    }

    fn screen() -> PracticeScreen {
        PracticeScreen::with_rng(false, StdRng::seed_from_u64(7))
    }

    fn draw(screen: &mut PracticeScreen, config: &Config, deck: &DeckService) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(config, deck);
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_navigation_wraps_and_resets_flip() {
        let config = Config::default();
        let mut deck = deck_with(3);
        let mut ctx = ScreenContext::new(&config, &mut deck);
        let mut screen = screen();
        screen.on_enter(&mut ctx).unwrap();

        screen.handle_event(key(KeyCode::Char(' ')), &mut ctx).unwrap();
        assert!(screen.is_flipped());

        screen.handle_event(key(KeyCode::Left), &mut ctx).unwrap();
        assert_eq!(screen.session().current_card_index(), Some(2));
        assert!(!screen.is_flipped());

        screen.handle_event(key(KeyCode::Right), &mut ctx).unwrap();
        assert_eq!(screen.session().current_card_index(), Some(0));
    }

    #[test]
    fn test_shuffle_toggle_restarts() {
        let config = Config::default();
        let mut deck = deck_with(5);
        let mut ctx = ScreenContext::new(&config, &mut deck);
        let mut screen = screen();
        screen.on_enter(&mut ctx).unwrap();
        screen.handle_event(key(KeyCode::Right), &mut ctx).unwrap();

        screen.handle_event(key(KeyCode::Char('s')), &mut ctx).unwrap();
        assert!(screen.session().is_shuffled());
        assert_eq!(screen.session().position(), 0);
        let mut sorted = screen.session().order().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);

        screen.handle_event(key(KeyCode::Char('s')), &mut ctx).unwrap();
        assert_eq!(screen.session().order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_escape_goes_home() {
        let config = Config::default();
        let mut deck = deck_with(1);
        let mut ctx = ScreenContext::new(&config, &mut deck);
        let mut screen = screen();
        assert_eq!(
            screen.handle_event(key(KeyCode::Esc), &mut ctx).unwrap(),
            ScreenAction::Navigate(ScreenId::Home)
        );
    }

    #[test]
    fn test_empty_deck_message() {
        let config = Config::default();
        let deck = deck_with(0);
        let mut screen = screen();
        let text = draw(&mut screen, &config, &deck);
        assert!(text.contains("No flashcards to practice."));
        assert_eq!(screen.session().state(), SessionState::Empty);
    }

    #[test]
    fn test_render_shows_progress_and_question() {
        let config = Config::default();
        let deck = deck_with(2);
        let mut screen = screen();
        let text = draw(&mut screen, &config, &deck);
        assert!(text.contains("Card 1 of 2"));
        assert!(text.contains("Q0"));
        assert!(!text.contains("A0"));
        assert!(text.contains("Shuffle"));
    }

    #[test]
    fn test_render_picks_up_new_cards() {
        let config = Config::default();
        let mut deck = deck_with(2);
        let mut screen = screen();
        {
            let mut ctx = ScreenContext::new(&config, &mut deck);
            screen.handle_event(key(KeyCode::Right), &mut ctx).unwrap();
        }
        assert_eq!(screen.session().position(), 1);

        deck.submit("Q2", "A2").unwrap();
        let text = draw(&mut screen, &config, &deck);
        assert!(text.contains("Card 1 of 3"));
        assert_eq!(screen.session().position(), 0);
    }
}
