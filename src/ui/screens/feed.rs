use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, Widget},
};
use crate::app::App;
use crate::modules::quest::Penalty;
use crate::ui::components::UiComponent;
use crate::ui::style::{ACCENT, RISKED};
use crate::util::string::StringUtils;

pub fn render_feed(app: &App, area: Rect, buf: &mut Buffer) {
    render_activity(&app.state.penalties, " Live Activity ", area, buf);
}

/// Penalty list shared by the feed pane and the quest dashboard.
pub fn render_activity(penalties: &[Penalty], title: &str, area: Rect, buf: &mut Buffer) {
    if penalties.is_empty() {
        UiComponent::empty_message(title, "No penalties yet. Stay strong.", Some(Color::DarkGray))
            .render(area, buf);
        return;
    }

    let items: Vec<ListItem> = penalties
        .iter()
        .map(|p| {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("+ ", Style::default().fg(RISKED)),
                    Span::raw(p.display_summary()).bold(),
                    Span::raw("  "),
                    Span::styled(format!("+${}", StringUtils::money(p.amount)), Style::default().fg(ACCENT).bold()),
                ]),
                Line::from(Span::styled(format!("  {}", p.date), Style::default().fg(Color::DarkGray))),
            ];
            if let Some(context) = &p.context {
                lines.push(Line::from(Span::styled(format!("  {}", context), Style::default().fg(Color::Gray).italic())));
            }
            ListItem::new(lines)
        })
        .collect();

    let title = format!("{}({}) ", title, StringUtils::maybe_pluralize_count(penalties.len(), ("penalty", "penalties")));

    List::new(items)
        .block(Block::bordered().title(title).border_type(BorderType::Rounded).border_style(Style::default().fg(Color::DarkGray)))
        .render(area, buf);
}
