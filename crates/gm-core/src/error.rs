//! Errors returned when a guess is rejected
//!
//! A rejected guess never consumes an attempt and never changes the round.

use thiserror::Error;

/// Reasons a guess can be rejected by [`GameSession::submit_guess`].
///
/// [`GameSession::submit_guess`]: crate::GameSession::submit_guess
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    /// No round is in progress; a new one has to be started first.
    #[error("No round in progress. Start a new game.")]
    InactiveSession,

    /// The guess lies outside `1..=range_max`.
    #[error("Enter a number between 1 and {range_max}")]
    OutOfRange { range_max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_bound() {
        let err = GuessError::OutOfRange { range_max: 50 };
        assert_eq!(err.to_string(), "Enter a number between 1 and 50");
    }

    #[test]
    fn test_inactive_message() {
        assert!(GuessError::InactiveSession.to_string().contains("new game"));
    }
}
