//! Closeness gauge widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Widget};

use crate::theme::Theme;

/// Proximity indicator scaled 0-100
pub struct ClosenessWidget<'a> {
    percent: u8,
    theme: &'a Theme,
}

impl<'a> ClosenessWidget<'a> {
    pub fn new(percent: u8, theme: &'a Theme) -> Self {
        Self {
            percent: percent.min(100),
            theme,
        }
    }

    pub fn label(&self) -> String {
        format!("Closeness: {}%", self.percent)
    }
}

impl Widget for ClosenessWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            )
            .gauge_style(Style::default().fg(self.theme.gauge))
            .percent(u16::from(self.percent))
            .label(self.label());
        gauge.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let theme = Theme::dark();
        assert_eq!(ClosenessWidget::new(56, &theme).label(), "Closeness: 56%");
    }

    #[test]
    fn test_percent_clamped() {
        let theme = Theme::dark();
        assert_eq!(ClosenessWidget::new(250, &theme).label(), "Closeness: 100%");
    }
}
