//! Input handling - raw guess text and key bindings
//!
//! The core only accepts pre-parsed integers, so turning the text field into
//! a number (and rejecting what isn't one) happens here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// Longest text the guess field accepts.
pub const MAX_INPUT_LEN: usize = 12;

/// Raw text that could not become a guess. Nothing is scored for these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a number.")]
    Empty,

    #[error("Enter a valid number.")]
    InvalidFormat(String),
}

/// Parse the guess field. Surrounding whitespace is ignored.
pub fn parse_guess(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::InvalidFormat(trimmed.to_string()))
}

/// Things the player can do from the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a digit or `-` to the guess field
    Type(char),
    Backspace,
    Submit,
    NextDifficulty,
    PrevDifficulty,
    NewGame,
    Help,
    /// Leave, asking first if a round is running
    Quit,
    /// Leave without asking (Ctrl+C)
    ForceQuit,
}

/// Convert a key event on the main screen to an action.
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Ctrl key combos
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Action::NewGame), // Ctrl+N: new game
            KeyCode::Char('c') => Some(Action::ForceQuit), // Ctrl+C: quit now
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Tab | KeyCode::Right => Some(Action::NextDifficulty),
        KeyCode::BackTab | KeyCode::Left => Some(Action::PrevDifficulty),
        KeyCode::F(1) | KeyCode::Char('?') => Some(Action::Help),
        KeyCode::F(2) => Some(Action::NewGame),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => Some(Action::Type(c)),
        _ => None,
    }
}
