//! Create screen: the card form and the card list.
//!
//! Focus cycles Question -> Answer -> card list. While a field has focus,
//! plain characters are typed; shortcuts only fire from the list.

use crate::components::{Footer, Header, InputField};
use crate::error::{CardField, DeckError};
use crate::keymap::Action;
use crate::screens::screen_trait::{key_press, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::{DeckService, SubmitOutcome};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::ui::Screen as ScreenId;
use crate::utils::{
    create_standard_layout, focused_border_style, sanitize_for_terminal, truncate,
    unfocused_border_style, ListStateExt, TextInput,
};
use crate::widgets::{Dialog, DialogVariant};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use std::collections::BTreeSet;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Question,
    Answer,
    List,
}

/// Inline message under the form
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Error(String),
    Info(String),
}

pub struct CreateScreen {
    question: TextInput,
    answer: TextInput,
    focus: Focus,
    list_state: ListState,
    /// Rows in the card list currently showing their answer
    flipped: BTreeSet<usize>,
    notice: Option<Notice>,
    /// Reset-all dialog; the flag is whether "Yes" is highlighted
    confirm_reset: Option<bool>,
}

impl Default for CreateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateScreen {
    pub fn new() -> Self {
        Self {
            question: TextInput::new(),
            answer: TextInput::new(),
            focus: Focus::Question,
            list_state: ListState::default(),
            flipped: BTreeSet::new(),
            notice: None,
            confirm_reset: None,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn question(&self) -> &str {
        self.question.text()
    }

    pub fn answer(&self) -> &str {
        self.answer.text()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Error(message)) => Some(message),
            _ => None,
        }
    }

    pub fn is_confirming_reset(&self) -> bool {
        self.confirm_reset.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    /// Reset the form to match the editor cursor: blank in create mode,
    /// pre-filled in edit mode.
    fn sync_form(&mut self, deck: &DeckService) {
        match deck.editing() {
            Some((_, card)) => {
                self.question.set_text(card.question.as_str());
                self.answer.set_text(card.answer.as_str());
            }
            None => {
                self.question.clear();
                self.answer.clear();
            }
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Question => Some(&mut self.question),
            Focus::Answer => Some(&mut self.answer),
            Focus::List => None,
        }
    }

    fn cycle_focus(&mut self, forward: bool, has_cards: bool) {
        self.focus = match (self.focus, forward) {
            (Focus::Question, true) => Focus::Answer,
            (Focus::Answer, true) if has_cards => Focus::List,
            (Focus::Answer, true) => Focus::Question,
            (Focus::List, true) => Focus::Question,
            (Focus::Question, false) if has_cards => Focus::List,
            (Focus::Question, false) => Focus::Answer,
            (Focus::Answer, false) => Focus::Question,
            (Focus::List, false) => Focus::Answer,
        };
    }

    fn submit(&mut self, deck: &mut DeckService) {
        match deck.submit(self.question.text(), self.answer.text()) {
            Ok(outcome) => {
                let (index, message) = match outcome {
                    SubmitOutcome::Added(i) => (i, "Flashcard added"),
                    SubmitOutcome::Updated(i) => (i, "Changes saved"),
                };
                self.question.clear();
                self.answer.clear();
                self.focus = Focus::Question;
                self.flipped.clear();
                self.list_state.select(Some(index));
                self.notice = Some(Notice::Info(message.to_string()));
            }
            Err(DeckError::Validation { field }) => {
                self.focus = match field {
                    CardField::Question => Focus::Question,
                    CardField::Answer => Focus::Answer,
                };
                self.notice = Some(Notice::Error(
                    DeckError::Validation { field }.to_string(),
                ));
            }
            Err(err) => self.report_failure("save the flashcard", err),
        }
    }

    fn report_failure(&mut self, what: &str, err: DeckError) {
        error!("Failed to {}: {}", what, err);
        self.notice = Some(Notice::Error(format!("Could not {}: {}", what, err)));
    }

    fn cancel_or_leave(&mut self, deck: &mut DeckService) -> ScreenAction {
        if deck.editor_cursor().is_some() {
            deck.cancel_edit();
            self.sync_form(deck);
            self.focus = Focus::Question;
            self.notice = None;
            ScreenAction::None
        } else {
            ScreenAction::Navigate(ScreenId::Home)
        }
    }

    fn delete_selected(&mut self, deck: &mut DeckService) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        match deck.delete(index) {
            Ok(_) => {
                // Deleting clears the editor cursor, so the form goes blank too
                self.sync_form(deck);
                self.flipped.clear();
                self.list_state.clamp_to(deck.len());
                if deck.is_empty() {
                    self.focus = Focus::Question;
                }
                self.notice = Some(Notice::Info("Flashcard deleted".to_string()));
            }
            Err(err) => self.report_failure("delete the flashcard", err),
        }
    }

    fn reset_all(&mut self, deck: &mut DeckService) {
        match deck.reset_all() {
            Ok(()) => {
                self.sync_form(deck);
                self.flipped.clear();
                self.list_state.select(None);
                self.focus = Focus::Question;
                self.notice = Some(Notice::Info("All flashcards deleted".to_string()));
            }
            Err(err) => self.report_failure("reset the flashcards", err),
        }
    }

    fn handle_dialog_key(&mut self, action: Option<Action>, deck: &mut DeckService) {
        let yes_selected = self.confirm_reset.unwrap_or(false);
        match action {
            Some(Action::Yes) => {
                self.confirm_reset = None;
                self.reset_all(deck);
            }
            Some(Action::No) | Some(Action::Cancel) => self.confirm_reset = None,
            Some(Action::Confirm) => {
                self.confirm_reset = None;
                if yes_selected {
                    self.reset_all(deck);
                }
            }
            Some(Action::MoveLeft)
            | Some(Action::MoveRight)
            | Some(Action::NextField)
            | Some(Action::PrevField) => self.confirm_reset = Some(!yes_selected),
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent, action: Option<Action>, deck: &mut DeckService) -> ScreenAction {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if let (KeyCode::Char(c), true) = (key.code, plain) {
            if let Some(input) = self.focused_input() {
                input.insert_char(c);
            }
            return ScreenAction::None;
        }

        let Some(action) = action else {
            return ScreenAction::None;
        };
        if action == Action::Quit {
            return ScreenAction::Quit;
        }
        if !TextInput::is_action_allowed_when_focused(&action) {
            return ScreenAction::None;
        }

        match action {
            Action::Confirm => self.submit(deck),
            Action::Cancel => return self.cancel_or_leave(deck),
            Action::NextField => self.cycle_focus(true, !deck.is_empty()),
            Action::PrevField => self.cycle_focus(false, !deck.is_empty()),
            other => {
                if let Some(input) = self.focused_input() {
                    input.handle_action(other);
                }
            }
        }
        ScreenAction::None
    }

    fn handle_list_key(&mut self, action: Option<Action>, ctx: &mut ScreenContext) -> ScreenAction {
        let len = ctx.deck.len();
        match action {
            Some(Action::MoveUp) => self.list_state.select_previous_wrap(len),
            Some(Action::MoveDown) => self.list_state.select_next_wrap(len),
            Some(Action::Flip) | Some(Action::Confirm) => {
                if let Some(index) = self.list_state.selected() {
                    if !self.flipped.remove(&index) {
                        self.flipped.insert(index);
                    }
                }
            }
            Some(Action::Edit) => {
                if let Some(index) = self.list_state.selected() {
                    match ctx.deck.begin_edit(index) {
                        Ok(()) => {
                            self.sync_form(ctx.deck);
                            self.focus = Focus::Question;
                            self.notice = None;
                        }
                        Err(err) => self.report_failure("edit the flashcard", err),
                    }
                }
            }
            Some(Action::Delete) => self.delete_selected(ctx.deck),
            Some(Action::ResetAll) => {
                if ctx.config.confirm_reset {
                    self.confirm_reset = Some(false);
                } else {
                    self.reset_all(ctx.deck);
                }
            }
            Some(Action::Create) => {
                ctx.deck.begin_create();
                self.sync_form(ctx.deck);
                self.focus = Focus::Question;
            }
            Some(Action::NextField) => self.cycle_focus(true, len > 0),
            Some(Action::PrevField) => self.cycle_focus(false, len > 0),
            Some(Action::Cancel) => return self.cancel_or_leave(ctx.deck),
            Some(Action::Help) => return ScreenAction::ShowHelp,
            Some(Action::Quit) => return ScreenAction::Quit,
            _ => {}
        }
        ScreenAction::None
    }

    fn render_notice_line(&self, frame: &mut Frame, area: Rect, editing: bool) {
        let t = theme();
        let label = if editing { "Save Changes" } else { "Add Flashcard" };
        let button_style = if self.focus == Focus::List {
            t.muted_style()
        } else {
            t.title_style()
        };
        let mut spans = vec![Span::styled(format!("[ {} ]", label), button_style)];
        match &self.notice {
            Some(Notice::Error(message)) => {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(message.as_str(), t.error_style()));
            }
            Some(Notice::Info(message)) => {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(message.as_str(), t.success_style()));
            }
            None => {}
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect, deck: &DeckService) {
        let t = theme();
        let border_style = if self.focus == Focus::List {
            focused_border_style()
        } else {
            unfocused_border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Flashcards ({}) ", deck.len()))
            .border_style(border_style);

        if deck.is_empty() {
            let empty = Paragraph::new("No flashcards yet.")
                .style(t.muted_style())
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(12) as usize;
        let editing = deck.editor_cursor();
        let items: Vec<ListItem> = deck
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let flipped = self.flipped.contains(&i);
                let (side, side_style) = if flipped {
                    ("A", t.card_style(true))
                } else {
                    ("Q", t.card_style(false))
                };
                let text = sanitize_for_terminal(card.face(flipped)).replace('\n', " ");
                let mut spans = vec![
                    Span::styled(format!("{:>3}. ", i + 1), t.muted_style()),
                    Span::styled(format!("{}: ", side), side_style),
                    Span::styled(truncate(&text, width), t.text_style()),
                ];
                if editing == Some(i) {
                    spans.push(Span::styled("  (editing)", t.warning_style()));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn footer_text(&self, ctx: &RenderContext) -> String {
        let keymap = &ctx.config.keymap;
        if self.confirm_reset.is_some() {
            return format!(
                "{}: Yes | {}: No",
                keymap.get_key_display_for_action(Action::Yes),
                keymap.get_key_display_for_action(Action::No)
            );
        }
        match self.focus {
            Focus::List => keymap.footer_card_list(),
            _ => keymap.footer_form(ctx.deck.editor_cursor().is_some()),
        }
    }
}

impl Screen for CreateScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header, content, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header, ScreenId::Create.title(), ScreenId::Create.description());

        let [question_area, answer_area, notice_area, list_area] = Layout::vertical([
            Constraint::Length(InputField::HEIGHT),
            Constraint::Length(InputField::HEIGHT),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(content);

        let dialog_open = self.confirm_reset.is_some();
        InputField::render(
            frame,
            question_area,
            &self.question,
            self.focus == Focus::Question && !dialog_open,
            "Question",
            "Type a question",
        );
        InputField::render(
            frame,
            answer_area,
            &self.answer,
            self.focus == Focus::Answer && !dialog_open,
            "Answer",
            "Type the answer",
        );
        self.render_notice_line(frame, notice_area, ctx.deck.editor_cursor().is_some());

        self.list_state.clamp_to(ctx.deck.len());
        self.render_list(frame, list_area, ctx.deck);

        Footer::render(frame, footer, &self.footer_text(ctx));

        if let Some(yes_selected) = self.confirm_reset {
            let message = format!(
                "Are you sure you want to delete all {} flashcards?",
                ctx.deck.len()
            );
            frame.render_widget(
                Dialog::new("Reset All Flashcards", &message)
                    .variant(DialogVariant::Danger)
                    .yes_selected(yes_selected),
                area,
            );
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let Some(key) = key_press(&event) else {
            return Ok(ScreenAction::None);
        };
        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        if self.confirm_reset.is_some() {
            self.handle_dialog_key(action, ctx.deck);
            return Ok(ScreenAction::None);
        }

        if self.focus == Focus::List {
            Ok(self.handle_list_key(action, ctx))
        } else {
            if matches!(key.code, KeyCode::Char(_)) {
                self.notice = None;
            }
            Ok(self.handle_input_key(key, action, ctx.deck))
        }
    }

    fn on_enter(&mut self, ctx: &mut ScreenContext) -> Result<()> {
        self.sync_form(ctx.deck);
        self.focus = Focus::Question;
        self.flipped.clear();
        self.notice = None;
        self.confirm_reset = None;
        self.list_state.clamp_to(ctx.deck.len());
        Ok(())
    }
}
