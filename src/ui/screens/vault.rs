use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use crate::app::App;

/// Placeholder pane. Nothing unlocks it yet.
pub fn render_vault(app: &App, area: Rect, buf: &mut Buffer) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(area);

    let text = Text::from(vec![
        Line::from("🛡").centered(),
        Line::from(""),
        Line::from("Vault is Locked").bold().centered(),
        Line::from(format!(
            "Finish your first {}-day quest to unlock the resilience vault.",
            app.state.quest.target_days
        ))
        .style(Style::default().fg(Color::DarkGray))
        .centered(),
    ]);

    Paragraph::new(text)
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(layout[1], buf);
}
