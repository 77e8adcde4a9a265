//! gm-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for the game.

pub mod app;
pub mod feedback;
pub mod input;
pub mod logging;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use feedback::{Feedback, Tone};
pub use input::{InputError, parse_guess};
pub use theme::Theme;
