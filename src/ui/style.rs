#[allow(unused_imports)] /// Needed for Stylize in this scope
use ratatui::style::{Style, Stylize};
use ratatui::style::Color;

use crate::modules::quest::calendar::DayStatus;

pub const ACCENT: Color = Color::Rgb(255, 110, 64);
pub const SECURED: Color = Color::Green;
pub const RISKED: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim().italic() }
}

pub fn day_status_style(status: DayStatus) -> Style {
    match status {
        DayStatus::Checked => Style::default().fg(Color::Black).bg(SECURED).bold(),
        DayStatus::Today => Style::default().fg(ACCENT).bold(),
        DayStatus::Missed => Style::default().fg(RISKED),
        DayStatus::Neutral => Style::default().fg(MUTED),
    }
}
