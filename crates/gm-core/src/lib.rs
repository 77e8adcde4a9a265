//! gm-core: Core game logic for GuessMaster
//!
//! This crate contains the game-state machine with no terminal I/O.
//! It is designed to be pure and testable: a UI shell owns a [`GameSession`],
//! starts rounds and submits guesses, and renders the returned outcomes.

pub mod difficulty;
pub mod error;
pub mod options;
pub mod outcome;
pub mod session;

mod rng;

pub use difficulty::Difficulty;
pub use error::GuessError;
pub use options::{GameOptions, OptionsError};
pub use outcome::{GuessOutcome, Verdict, closeness_percent};
pub use rng::GameRng;
pub use session::{GameSession, RoundStatus};
