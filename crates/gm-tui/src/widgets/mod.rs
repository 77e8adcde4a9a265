//! UI Widgets

mod closeness;
mod difficulty;
mod status;

pub use closeness::ClosenessWidget;
pub use difficulty::DifficultyWidget;
pub use status::{StatusWidget, Tally};
