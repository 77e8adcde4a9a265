//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tracing::{debug, info, warn};

use gm_core::{Difficulty, GameOptions, GameSession};

use crate::feedback::Feedback;
use crate::input::{Action, MAX_INPUT_LEN, key_to_action, parse_guess};
use crate::theme::Theme;
use crate::widgets::{ClosenessWidget, DifficultyWidget, StatusWidget, Tally};

/// Buttons of the round-over dialog, in display order.
const ROUND_OVER_CHOICES: [&str; 2] = ["Play Again", "Exit"];

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Normal play: typing guesses
    Playing,
    /// Showing help
    Help,
    /// Round finished; play again or exit
    RoundOver { won: bool, target: u32, cursor: usize },
    /// Asking before quitting mid-round
    ConfirmExit,
}

/// Application state
pub struct App {
    /// The game itself
    session: GameSession,

    options: GameOptions,

    /// Tier applied at the next new game
    selected: Difficulty,

    /// Current UI mode
    mode: UiMode,

    /// Guess field contents
    input: String,

    feedback: Feedback,

    /// Closeness of the last scored guess
    closeness: u8,

    tally: Tally,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    should_quit: bool,
}

impl App {
    /// Create the app and start the first round at the configured difficulty.
    pub fn new(session: GameSession, options: GameOptions, theme: Theme) -> Self {
        let selected = options.difficulty;
        let mut app = Self {
            session,
            options,
            selected,
            mode: UiMode::Playing,
            input: String::new(),
            feedback: Feedback::default(),
            closeness: 0,
            tally: Tally::default(),
            theme,
            should_quit: false,
        };
        app.new_game();
        app
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn closeness(&self) -> u8 {
        self.closeness
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Start a round at the selected difficulty, dropping any round in progress.
    pub fn new_game(&mut self) {
        if self.session.is_active() {
            debug!(
                attempts_used = self.session.attempts_used(),
                "abandoning round in progress"
            );
        }
        self.session.start_new_round(self.selected);
        self.input.clear();
        self.closeness = 0;
        self.feedback = Feedback::new_round();
        self.mode = UiMode::Playing;
        info!(
            difficulty = %self.selected,
            range_max = self.session.range_max(),
            attempts = self.session.max_attempts(),
            "new round"
        );
    }

    /// Handle an input event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.mode {
            UiMode::Playing => self.handle_playing_input(key),
            UiMode::Help => self.handle_help_input(key),
            UiMode::RoundOver { .. } => self.handle_round_over_input(key),
            UiMode::ConfirmExit => self.handle_confirm_exit_input(key),
        }
    }

    fn handle_playing_input(&mut self, key: KeyEvent) {
        let Some(action) = key_to_action(key) else {
            return;
        };

        match action {
            Action::Type(c) => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            Action::Backspace => {
                self.input.pop();
            }
            Action::Submit => self.submit_input(),
            Action::NextDifficulty => self.selected = self.selected.next(),
            Action::PrevDifficulty => self.selected = self.selected.prev(),
            Action::NewGame => self.new_game(),
            Action::Help => self.mode = UiMode::Help,
            Action::Quit => {
                if self.options.confirm_exit && self.session.is_active() {
                    self.mode = UiMode::ConfirmExit;
                } else {
                    self.should_quit = true;
                }
            }
            Action::ForceQuit => self.should_quit = true,
        }
    }

    /// Parse the guess field and hand the number to the session.
    fn submit_input(&mut self) {
        let value = match parse_guess(&self.input) {
            Ok(value) => value,
            Err(err) => {
                warn!(input = %self.input, error = %err, "rejected input");
                self.feedback = Feedback::warning(err.to_string());
                return;
            }
        };

        let outcome = match self.session.submit_guess(value) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(guess = value, error = %err, "rejected guess");
                self.feedback = Feedback::warning(err.to_string());
                return;
            }
        };

        self.input.clear();
        self.closeness = outcome.closeness_percent;
        let target = self.session.revealed_target();
        self.feedback = Feedback::from_outcome(&outcome, target);
        debug!(
            guess = value,
            verdict = ?outcome.verdict,
            closeness = outcome.closeness_percent,
            attempts_remaining = outcome.attempts_remaining,
            "scored guess"
        );

        if let (true, Some(target)) = (outcome.round_over, target) {
            self.tally.record(outcome.won);
            info!(
                won = outcome.won,
                target,
                attempts_used = self.session.attempts_used(),
                "round over"
            );
            self.mode = UiMode::RoundOver {
                won: outcome.won,
                target,
                cursor: 0,
            };
        }
    }

    fn handle_help_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Enter | KeyCode::F(1) => {
                self.mode = UiMode::Playing;
            }
            _ => {}
        }
    }

    fn handle_round_over_input(&mut self, key: KeyEvent) {
        let UiMode::RoundOver { won, target, cursor } = self.mode else {
            return;
        };

        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.mode = UiMode::RoundOver {
                    won,
                    target,
                    cursor: (cursor + 1) % ROUND_OVER_CHOICES.len(),
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if cursor == 0 {
                    self.new_game();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => self.new_game(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_confirm_exit_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = UiMode::Playing;
            }
            _ => {}
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Instruction
                Constraint::Length(1), // Difficulty selector
                Constraint::Length(3), // Guess field
                Constraint::Length(1), // Feedback
                Constraint::Length(3), // Closeness gauge
                Constraint::Length(1), // Status
                Constraint::Min(1),    // Key hints
            ])
            .split(frame.area());

        let title = Paragraph::new("GuessMaster")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.theme.title)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            );
        frame.render_widget(title, chunks[0]);

        let instruction = Paragraph::new("Pick a difficulty and guess the number:")
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.text));
        frame.render_widget(instruction, chunks[1]);

        frame.render_widget(
            DifficultyWidget::new(self.selected, self.session.difficulty(), &self.theme),
            chunks[2],
        );

        self.render_guess_field(frame, chunks[3]);

        let feedback = Paragraph::new(self.feedback.text.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.theme.tone_color(self.feedback.tone))
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(feedback, chunks[4]);

        frame.render_widget(ClosenessWidget::new(self.closeness, &self.theme), chunks[5]);

        frame.render_widget(
            StatusWidget::new(
                &self.session,
                self.tally,
                self.options.show_range,
                &self.theme,
            ),
            chunks[6],
        );

        let hints = Paragraph::new(
            "Enter: guess  Tab/←→: difficulty  Ctrl+N/F2: new game  ?/F1: help  Esc: quit",
        )
        .style(Style::default().fg(self.theme.text_dim));
        frame.render_widget(hints, chunks[7]);

        // Render modal overlays based on mode
        match self.mode.clone() {
            UiMode::Playing => {}
            UiMode::Help => self.render_help(frame),
            UiMode::RoundOver {
                won,
                target,
                cursor,
            } => self.render_round_over(frame, won, target, cursor),
            UiMode::ConfirmExit => self.render_confirm_exit(frame),
        }
    }

    fn render_guess_field(&self, frame: &mut Frame, area: Rect) {
        let editable = self.session.is_active() && self.mode == UiMode::Playing;
        let border = if editable {
            self.theme.border_action
        } else {
            self.theme.text_dim
        };
        let block = Block::default()
            .title("Your guess")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let display = if editable {
            format!("{}_", self.input)
        } else {
            self.input.clone()
        };
        let paragraph = Paragraph::new(display)
            .block(block)
            .style(Style::default().fg(self.theme.text));
        frame.render_widget(paragraph, area);
    }

    /// Render help overlay
    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);

        let help_text = r#"Guess the hidden number within the allowed attempts.
After each guess you learn whether it was too high or too low,
and the gauge shows how close you were.

  0-9 / -      Type your guess
  Enter        Submit guess
  Backspace    Edit
  Tab / ←→     Choose difficulty (applies to the next game)
  Ctrl+N / F2  New game
  ? / F1       Help
  Esc          Quit

Easy   1-10,  5 tries
Medium 1-50,  7 tries
Hard   1-100, 10 tries

Press ESC or SPACE to close"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));

        frame.render_widget(paragraph, area);
    }

    /// Render the play-again dialog
    fn render_round_over(&self, frame: &mut Frame, won: bool, target: u32, cursor: usize) {
        let area = centered_rect(50, 40, frame.area());
        frame.render_widget(Clear, area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(""));
        if won {
            lines.push(Line::from(Span::styled(
                "You Win!",
                Style::default()
                    .fg(self.theme.correct)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "Found {} in {} of {} tries",
                target,
                self.session.attempts_used(),
                self.session.max_attempts()
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Game Over!",
                Style::default()
                    .fg(self.theme.game_over)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("The number was {}", target)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Play again?"));
        lines.push(Line::from(""));

        let mut buttons: Vec<Span> = Vec::new();
        for (i, label) in ROUND_OVER_CHOICES.iter().enumerate() {
            let style = if i == cursor {
                Style::default()
                    .fg(self.theme.cursor_fg)
                    .bg(self.theme.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text)
            };
            buttons.push(Span::styled(format!("[ {} ]", label), style));
            buttons.push(Span::raw("   "));
        }
        buttons.pop();
        lines.push(Line::from(buttons));

        let border = if won {
            self.theme.border_accent
        } else {
            self.theme.border_danger
        };
        let block = Block::default()
            .title(" Game Result ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }

    fn render_confirm_exit(&self, frame: &mut Frame) {
        let area = centered_rect(40, 20, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title("Quit")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));

        let paragraph = Paragraph::new("A round is in progress. Quit anyway? (y/n)")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(self.theme.text))
            .wrap(ratatui::widgets::Wrap { trim: true });

        frame.render_widget(paragraph, area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
        assert_eq!(inner.y, 10);
    }
}
