use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use crate::app::App;
use crate::modules::quest::MainAction;
use crate::ui::components::UiComponent;
use crate::ui::style::{ACCENT, MUTED, SECURED};
use crate::view::View;

/// Bottom bar: the four views with the context-aware action in the middle.
pub fn render_nav(app: &App, area: Rect, buf: &mut Buffer) {
    let views = View::all();
    let (left, right) = views.split_at(views.len() / 2);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (view, cell) in left.iter().zip(&columns[..2]).chain(right.iter().zip(&columns[3..])) {
        let style = if *view == app.view {
            Style::default().fg(ACCENT).bold()
        } else {
            Style::default().fg(MUTED)
        };
        Paragraph::new(Line::from(format!("{} {} [{}]", view.icon(), view.as_str(), view.hotkey())))
            .style(style)
            .centered()
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(MUTED)))
            .render(*cell, buf);
    }

    let action = app.state.quest.main_action(app.today());
    let action_style = match action {
        MainAction::Check => Style::default().fg(Color::Black).bg(Color::White).bold(),
        MainAction::Done => Style::default().fg(Color::White).bg(SECURED).bold(),
        MainAction::Create => Style::default().fg(Color::White).bg(ACCENT).bold(),
    };
    Paragraph::new(format!("＋ {}", action.label()))
        .style(action_style)
        .centered()
        .block(Block::bordered().border_type(BorderType::Rounded))
        .render(columns[2], buf);
}

pub fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
    match &app.status_message {
        Some(message) => UiComponent::status(message).render(area, buf),
        None => UiComponent::help("space check in · t tempter · n new quest · 1-4 views · q quit").render(area, buf),
    }
}
