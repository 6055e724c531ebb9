use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget, Wrap},
};
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

use crate::app::App;
use crate::modules::quest::{QuestRole, PENALTY_AMOUNT};
use crate::ui::components::UiComponent;
use crate::ui::style::{ACCENT, MUTED, RISKED};
use crate::util::string::StringUtils;

pub fn render_tempter(app: &mut App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(RISKED))
        .title(Line::from(" 😈 EXPOSE THE TEMPTER ").bold());
    let inner = block.inner(area);
    block.render(area, buf);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let whose = match app.state.quest.role {
        QuestRole::Supporter => app.state.quest.target_user.clone().unwrap_or_default(),
        QuestRole::Owner => "the".to_string(),
    };
    Paragraph::new(Line::from(vec![
        Span::raw(format!("Did someone try to break {} streak? Enter their handle to request a ", whose)),
        Span::styled(format!("${} penalty", StringUtils::money(PENALTY_AMOUNT)), Style::default().fg(RISKED).bold()),
        Span::raw("."),
    ]))
    .wrap(Wrap { trim: true })
    .render(layout[0], buf);

    let input = if app.tempter.input.is_empty() {
        Line::from("@username or phone").fg(Color::DarkGray).italic()
    } else {
        Line::from(vec![Span::raw(app.tempter.input.clone()), Span::styled("▏", Style::default().fg(ACCENT))])
    };
    Paragraph::new(input)
        .block(Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(ACCENT)))
        .render(layout[1], buf);

    let button = Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(RISKED));
    let button_inner = button.inner(layout[2]);
    button.render(layout[2], buf);

    if app.is_penalty_pending() {
        let throbber = Throbber::default()
            .label("SENDING...")
            .throbber_set(BRAILLE_SIX)
            .style(Style::default().fg(MUTED));
        StatefulWidget::render(throbber, button_inner, buf, &mut app.throbber);
    } else {
        let enabled = !app.tempter.input.trim().is_empty();
        let style = if enabled { Style::default().fg(RISKED).bold() } else { Style::default().fg(MUTED) };
        Paragraph::new("➤ SEND PENALTY REQUEST").style(style).centered().render(button_inner, buf);
    }

    UiComponent::help("Enter send · Esc cancel").render(layout[4], buf);
}
