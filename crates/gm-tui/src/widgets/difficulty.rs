//! Difficulty selector widget

use gm_core::Difficulty;
use ratatui::prelude::*;
use ratatui::widgets::Widget;
use strum::IntoEnumIterator;

use crate::theme::Theme;

/// One-line selector listing every tier, the chosen one highlighted.
pub struct DifficultyWidget<'a> {
    selected: Difficulty,
    /// Tier of the round currently on screen
    current: Difficulty,
    theme: &'a Theme,
}

impl<'a> DifficultyWidget<'a> {
    pub fn new(selected: Difficulty, current: Difficulty, theme: &'a Theme) -> Self {
        Self {
            selected,
            current,
            theme,
        }
    }
}

impl Widget for DifficultyWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            "Difficulty: ",
            Style::default().fg(self.theme.text),
        )];

        for difficulty in Difficulty::iter() {
            let label = format!(" {} ", difficulty.label());
            let style = if difficulty == self.selected {
                Style::default()
                    .fg(self.theme.cursor_fg)
                    .bg(self.theme.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text_dim)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        if self.selected != self.current {
            spans.push(Span::styled(
                "(next game)",
                Style::default().fg(self.theme.text_dim),
            ));
        }

        Line::from(spans).render(area, buf);
    }
}
