use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::Paragraph,
};

use super::UiComponent;

impl UiComponent {
    /// Single-line footer feedback.
    pub fn status(status: &str) -> Paragraph<'_> {
        Paragraph::new(status)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
    }
}
