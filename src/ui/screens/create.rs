use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, StatefulWidget, Widget},
};
use throbber_widgets_tui::{Throbber, BRAILLE_SIX};

use crate::app::App;
use crate::modules::quest::form::{CreateQuestForm, FormField};
use crate::ui::components::UiComponent;
use crate::ui::style::{dim_unless_focused, ACCENT, MUTED, RISKED};

pub fn render_create(app: &mut App, area: Rect, buf: &mut Buffer) {
    let fields = app.form.visible_fields();

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ]);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    Paragraph::new(vec![
        Line::from("‹ Esc Back to Quest").fg(MUTED),
        Line::from("New Quest").bold(),
        Line::from("Talk is cheap. Show your commitment.").fg(MUTED),
    ])
    .render(layout[0], buf);

    for (idx, field) in fields.iter().enumerate() {
        render_field(&app.form, *field, layout[idx + 1], buf);
    }

    let rest = &layout[fields.len() + 1..];

    if let Some(error) = &app.form.error {
        Paragraph::new(error.to_string()).fg(RISKED).render(rest[0], buf);
    }

    render_submit(app, rest[1], buf);

    UiComponent::help("Tab/↑↓ field · ←/→ or space role · Enter submit · Esc back").render(rest[2], buf);
}

fn render_field(form: &CreateQuestForm, field: FormField, area: Rect, buf: &mut Buffer) {
    let is_focused = form.focus == field;
    let border_style = dim_unless_focused(is_focused, Style::default().fg(if is_focused { ACCENT } else { MUTED }));

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(format!(" {} ", field.label()));

    let content = match field {
        FormField::Role => role_line(form.for_self),
        _ => {
            let value = form.field_value(field);
            if value.is_empty() {
                Line::from(field.placeholder()).fg(Color::DarkGray).italic()
            } else if is_focused {
                Line::from(vec![Span::raw(value), Span::styled("▏", Style::default().fg(ACCENT))])
            } else {
                Line::from(value)
            }
        }
    };

    Paragraph::new(content).block(block).render(area, buf);
}

fn role_line(for_self: bool) -> Line<'static> {
    let selected = Style::default().fg(Color::Black).bg(Color::White).bold();
    let unselected = Style::default().fg(MUTED);

    Line::from(vec![
        Span::styled("  Me  ", if for_self { selected } else { unselected }),
        Span::raw("   "),
        Span::styled("  Someone Else  ", if for_self { unselected } else { selected }),
    ])
}

fn render_submit(app: &mut App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    block.render(area, buf);

    if app.is_creating() {
        let throbber = Throbber::default()
            .label("INITIATING QUEST...")
            .throbber_set(BRAILLE_SIX)
            .style(Style::default().fg(MUTED));
        StatefulWidget::render(throbber, inner, buf, &mut app.throbber);
    } else {
        Paragraph::new("START COMMITMENT").bold().centered().render(inner, buf);
    }
}
