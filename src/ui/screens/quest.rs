use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Gauge, Paragraph, StatefulWidget, Widget},
};
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

use crate::app::{App, AvatarSlot};
use crate::modules::quest::{
    calendar::resilience_log,
    progress::{day_counter, headline, status_label, QuestProgress},
    QuestRole, PENALTY_AMOUNT,
};
use crate::ui::screens::feed::render_activity;
use crate::ui::style::{day_status_style, ACCENT, MUTED, RISKED, SECURED};
use crate::util::string::StringUtils;

/// Width of one resilience-log cell, borders included.
const DAY_CELL_WIDTH: u16 = 6;

pub fn render_quest(app: &mut App, area: Rect, buf: &mut Buffer) {
    let is_supporter = app.state.quest.role == QuestRole::Supporter;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(if is_supporter { 4 } else { 0 }),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    render_header(app, layout[0], buf);
    render_bounty_card(app, layout[1], buf);
    render_progress(app, layout[2], buf);
    render_calendar(app, layout[3], buf);
    if is_supporter {
        render_supporter_callout(layout[4], buf);
    }
    render_tempted_prompt(app, layout[5], buf);
    render_activity(&app.state.penalties, " Live Activity ", layout[6], buf);
}

fn render_header(app: &mut App, area: Rect, buf: &mut Buffer) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(10)])
        .split(area);

    Paragraph::new(Line::from(vec![
        Span::raw("🏆 "),
        Span::styled("DETERMINED", Style::default().fg(ACCENT).bold()),
    ]))
    .block(Block::default().padding(ratatui::widgets::Padding::top(1)))
    .render(layout[0], buf);

    let avatar_block = Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(MUTED));
    let inner = avatar_block.inner(layout[1]);
    avatar_block.render(layout[1], buf);

    match &mut app.avatar {
        AvatarSlot::Loading => {
            let throbber = Throbber::default()
                .throbber_set(BRAILLE_SIX)
                .throbber_style(Style::default().fg(ACCENT));
            StatefulWidget::render(throbber, inner, buf, &mut app.throbber);
        }
        AvatarSlot::Ready { renderer: Some(renderer) } => renderer.render(inner, buf),
        AvatarSlot::Ready { renderer: None } | AvatarSlot::Missing => {
            Paragraph::new("👤").alignment(Alignment::Center).render(inner, buf);
        }
    }
}

fn render_bounty_card(app: &App, area: Rect, buf: &mut Buffer) {
    let quest = &app.state.quest;
    let progress = QuestProgress::of(quest);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(Line::from(headline(quest)).bold())
        .title(Line::from(" ⚡ LIVE ").fg(RISKED).right_aligned());

    let text = Text::from(vec![
        Line::from(vec![
            Span::styled("$", Style::default().fg(MUTED)),
            Span::styled(StringUtils::compact_money(quest.bounty), Style::default().bold()),
            Span::raw("    "),
            Span::styled("Secured $", Style::default().fg(SECURED)),
            Span::styled(progress.secured_display(), Style::default().fg(SECURED).bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("3 supporters", Style::default().bold()),
            Span::styled(" funding this quest", Style::default().fg(MUTED)),
        ]),
    ]);

    Paragraph::new(text).block(block).render(area, buf);
}

fn render_progress(app: &App, area: Rect, buf: &mut Buffer) {
    let quest = &app.state.quest;
    let progress = QuestProgress::of(quest);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED))
        .title(Line::from(format!(" {} ", quest.habit_name)).bold())
        .title(Line::from(format!(" 🔥 {} ", day_counter(quest))).fg(ACCENT).right_aligned());
    let inner = block.inner(area);
    block.render(area, buf);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
        .ratio(progress.gauge_ratio())
        .label(format!("{:.0}%", progress.gauge_ratio() * 100.0))
        .render(rows[0], buf);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    Paragraph::new(Text::from(vec![
        Line::from("Status").fg(MUTED),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(SECURED)),
            Span::raw(status_label(quest)).bold(),
        ]),
    ]))
    .render(columns[0], buf);

    Paragraph::new(Text::from(vec![
        Line::from("Risked Balance").fg(MUTED),
        Line::from(format!("${}", progress.risked_display())).bold(),
    ]))
    .alignment(Alignment::Right)
    .render(columns[1], buf);
}

fn render_calendar(app: &App, area: Rect, buf: &mut Buffer) {
    let today = app.today();
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(MUTED))
        .title(Line::from(" 📅 RESILIENCE LOG ").bold())
        .title(Line::from(" ← older ").fg(MUTED).right_aligned());
    let inner = block.inner(area);
    block.render(area, buf);

    let fits = (inner.width / DAY_CELL_WIDTH) as usize;
    let mut days = resilience_log(&app.state.quest, today, app.config.missed_after);
    days.truncate(fits);
    days.reverse();

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(DAY_CELL_WIDTH); days.len()])
        .split(inner);

    for (day, cell) in days.iter().zip(cells.iter()) {
        let style = day_status_style(day.status);
        Paragraph::new(Text::from(vec![
            Line::from(day.day_name.clone()).fg(MUTED),
            Line::from(day.day_num.to_string()).bold(),
            Line::from(Span::styled(format!(" {} ", day.status.marker()), style)),
        ]))
        .alignment(Alignment::Center)
        .render(*cell, buf);
    }
}

fn render_supporter_callout(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Text::from(vec![
        Line::from("👥 Supporter Mode").bold(),
        Line::from("Only the quest owner can check-in. You're here to watch and fund.").fg(MUTED),
    ]))
    .block(Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(Color::Blue)))
    .render(area, buf);
}

fn render_tempted_prompt(app: &App, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Text::from(vec![
        Line::from(format!("⚠ Someone Tempted {}", app.state.quest.tempted_party())).bold(),
        Line::from(format!("Press t to charge them ${}", StringUtils::money(PENALTY_AMOUNT))).fg(MUTED),
    ]))
    .block(Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(RISKED)))
    .render(area, buf);
}
