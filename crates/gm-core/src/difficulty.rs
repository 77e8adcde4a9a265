//! Difficulty tiers
//!
//! Each tier fixes the guessing range `1..=range_max` and the number of
//! attempts a round allows.

use strum::{Display, EnumIter, EnumString, VariantNames};

/// Difficulty of a round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, VariantNames,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// 1-10, 5 tries
    #[default]
    Easy,
    /// 1-50, 7 tries
    Medium,
    /// 1-100, 10 tries
    Hard,
}

impl Difficulty {
    /// Upper bound of the guessing range (the lower bound is always 1).
    pub const fn range_max(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 50,
            Difficulty::Hard => 100,
        }
    }

    /// Attempts allowed per round.
    pub const fn max_attempts(self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 7,
            Difficulty::Hard => 10,
        }
    }

    /// Label shown in the difficulty selector, e.g. "Easy (1-10, 5 tries)".
    pub fn label(self) -> String {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        format!("{} (1-{}, {} tries)", name, self.range_max(), self.max_attempts())
    }

    /// Next tier, wrapping from Hard back to Easy.
    pub const fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Previous tier, wrapping from Easy back to Hard.
    pub const fn prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}
