//! Feedback line shown under the guess field

use gm_core::{GuessOutcome, Verdict};

/// Visual category of a feedback message; the theme maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    TooHigh,
    TooLow,
    Correct,
    GameOver,
    /// Rejected input, nothing was scored
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: Tone,
}

impl Feedback {
    pub fn new_round() -> Self {
        Self {
            text: "New game started! Make your guess.".to_string(),
            tone: Tone::Neutral,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Warning,
        }
    }

    /// Message for a scored guess. `target` is only available once the
    /// round is over.
    pub fn from_outcome(outcome: &GuessOutcome, target: Option<u32>) -> Self {
        let shown = target.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string());
        if outcome.won {
            return Self {
                text: format!("Correct! The number was {}", shown),
                tone: Tone::Correct,
            };
        }
        if outcome.is_lost() {
            return Self {
                text: format!("Game Over! The number was {}", shown),
                tone: Tone::GameOver,
            };
        }
        match outcome.verdict {
            Verdict::TooHigh => Self {
                text: format!("▲ {}", outcome.verdict),
                tone: Tone::TooHigh,
            },
            Verdict::TooLow => Self {
                text: format!("▼ {}", outcome.verdict),
                tone: Tone::TooLow,
            },
            Verdict::Correct => Self {
                text: outcome.verdict.to_string(),
                tone: Tone::Correct,
            },
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self {
            text: " ".to_string(),
            tone: Tone::Neutral,
        }
    }
}
