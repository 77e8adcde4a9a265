//! Game session: the round state machine
//!
//! A session is either idle (no round yet, or the last round is over) or has
//! a round in progress. Only [`GameSession::start_new_round`] leaves the idle
//! state; a winning guess or running out of attempts returns to it.

use crate::difficulty::Difficulty;
use crate::error::GuessError;
use crate::outcome::{GuessOutcome, Verdict, closeness_percent};
use crate::rng::GameRng;

/// Where the current (or most recent) round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundStatus {
    /// No round has been started yet
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost)
    }
}

/// Owns all mutable game state. Single owner; the caller serializes access.
#[derive(Debug, Clone)]
pub struct GameSession {
    rng: GameRng,
    difficulty: Difficulty,
    target: u32,
    attempts_remaining: u32,
    status: RoundStatus,
}

impl GameSession {
    /// Create an idle session seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Create an idle session whose targets are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            rng,
            difficulty: Difficulty::default(),
            target: 1,
            attempts_remaining: 0,
            status: RoundStatus::NotStarted,
        }
    }

    /// Start a fresh round, discarding any round in progress.
    pub fn start_new_round(&mut self, difficulty: Difficulty) {
        let target = self.rng.rnd(difficulty.range_max());
        self.reset(difficulty, target);
    }

    /// Start a round with a chosen target instead of a random one.
    ///
    /// Fails with [`GuessError::OutOfRange`] if `target` is not in
    /// `1..=range_max`; the session is left untouched in that case.
    pub fn start_rigged_round(
        &mut self,
        difficulty: Difficulty,
        target: u32,
    ) -> Result<(), GuessError> {
        let range_max = difficulty.range_max();
        if !(1..=range_max).contains(&target) {
            return Err(GuessError::OutOfRange { range_max });
        }
        self.reset(difficulty, target);
        Ok(())
    }

    fn reset(&mut self, difficulty: Difficulty, target: u32) {
        self.difficulty = difficulty;
        self.target = target;
        self.attempts_remaining = difficulty.max_attempts();
        self.status = RoundStatus::InProgress;
    }

    /// Score a guess.
    ///
    /// Rejections are checked before anything changes: an idle session
    /// gives [`GuessError::InactiveSession`], a value outside
    /// `1..=range_max` gives [`GuessError::OutOfRange`].
    pub fn submit_guess(&mut self, value: i64) -> Result<GuessOutcome, GuessError> {
        if !self.is_active() {
            return Err(GuessError::InactiveSession);
        }
        let range_max = self.range_max();
        if value < 1 || value > i64::from(range_max) {
            return Err(GuessError::OutOfRange { range_max });
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);

        let verdict = Verdict::of(value, self.target);
        let closeness = closeness_percent(value, self.target, range_max);

        if verdict == Verdict::Correct {
            self.status = RoundStatus::Won;
        } else if self.attempts_remaining == 0 {
            self.status = RoundStatus::Lost;
        }

        Ok(GuessOutcome {
            verdict,
            closeness_percent: closeness,
            attempts_remaining: self.attempts_remaining,
            round_over: self.status.is_over(),
            won: self.status == RoundStatus::Won,
        })
    }

    /// The target, but only once the round is over.
    pub fn revealed_target(&self) -> Option<u32> {
        self.status.is_over().then_some(self.target)
    }

    pub fn is_active(&self) -> bool {
        self.status == RoundStatus::InProgress
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Difficulty of the current or most recent round.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn range_max(&self) -> u32 {
        self.difficulty.range_max()
    }

    pub fn max_attempts(&self) -> u32 {
        self.difficulty.max_attempts()
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Scored guesses made in the current round.
    pub fn attempts_used(&self) -> u32 {
        match self.status {
            RoundStatus::NotStarted => 0,
            _ => self.max_attempts() - self.attempts_remaining,
        }
    }

    /// Seed of the random source, for replaying a session.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
