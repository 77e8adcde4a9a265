//! Result of a scored guess

use strum::Display;

/// Direction of a guess relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[strum(to_string = "Too Low!")]
    TooLow,
    #[strum(to_string = "Too High!")]
    TooHigh,
    #[strum(to_string = "Correct!")]
    Correct,
}

impl Verdict {
    /// Classify `guess` against `target`.
    pub fn of(guess: i64, target: u32) -> Self {
        let target = i64::from(target);
        if guess == target {
            Verdict::Correct
        } else if guess > target {
            Verdict::TooHigh
        } else {
            Verdict::TooLow
        }
    }
}

/// Everything the UI needs to render after a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub verdict: Verdict,
    /// 0-100 proximity score, 100 only for the exact target
    pub closeness_percent: u8,
    /// Attempts left after this guess
    pub attempts_remaining: u32,
    pub round_over: bool,
    /// Only meaningful when `round_over` is set
    pub won: bool,
}

impl GuessOutcome {
    /// Round ended without finding the target.
    pub fn is_lost(&self) -> bool {
        self.round_over && !self.won
    }
}

/// Proximity score of `guess` to `target` on the range `1..=range_max`.
///
/// `max(0, 100 - |guess - target| * 100 / max(1, range_max - 1))` with
/// integer division. The distance is never negative, so flooring and
/// truncating division agree.
pub fn closeness_percent(guess: i64, target: u32, range_max: u32) -> u8 {
    let diff = guess.abs_diff(i64::from(target));
    let max_diff = u64::from(range_max.saturating_sub(1).max(1));
    let penalty = diff.saturating_mul(100) / max_diff;
    100u64.saturating_sub(penalty) as u8
}
