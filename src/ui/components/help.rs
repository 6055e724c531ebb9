use ratatui::{
    layout::Alignment,
    prelude::{Color, Style},
    widgets::Paragraph,
};

use super::UiComponent;

impl UiComponent {
    pub fn help(text: &str) -> Paragraph<'_> {
        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
    }
}
