//! Status line widget

use gm_core::GameSession;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Finished rounds for this process. Abandoned rounds are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    pub fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses
    }
}

/// Widget for rendering the status line
pub struct StatusWidget<'a> {
    session: &'a GameSession,
    tally: Tally,
    show_range: bool,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(session: &'a GameSession, tally: Tally, show_range: bool, theme: &'a Theme) -> Self {
        Self {
            session,
            tally,
            show_range,
            theme,
        }
    }

    pub fn attempts_text(&self) -> String {
        let mut text = format!("Attempts left: {}", self.session.attempts_remaining());
        if self.show_range {
            text.push_str(&format!(" (Range 1-{})", self.session.range_max()));
        }
        text
    }

    pub fn tally_text(&self) -> String {
        format!(
            "Wins: {}  Losses: {}  Rounds: {}",
            self.tally.wins,
            self.tally.losses,
            self.tally.rounds()
        )
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left = self.attempts_text();
        let right = self.tally_text();

        buf.set_string(area.x, area.y, &left, Style::default().fg(self.theme.text));

        let right_width = right.chars().count() as u16;
        let left_width = left.chars().count() as u16;
        if area.width >= left_width + right_width + 2 {
            buf.set_string(
                area.x + area.width - right_width,
                area.y,
                &right,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
