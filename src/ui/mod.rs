pub mod components;
pub mod screens;
pub mod style;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Clear, Widget},
};
use crate::app::App;
use crate::view::View;
use crate::ui::screens::{create, feed, nav, quest, tempter, vault};

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        match self.view {
            View::Quest => quest::render_quest(self, layout[0], buf),
            View::Vault => vault::render_vault(self, layout[0], buf),
            View::Create => create::render_create(self, layout[0], buf),
            View::Feed => feed::render_feed(self, layout[0], buf),
        }

        nav::render_footer(self, layout[1], buf);
        nav::render_nav(self, layout[2], buf);

        if self.tempter.open {
            let popup = centered_rect(60, 40, area);
            Clear.render(popup, buf);
            tempter::render_tempter(self, popup, buf);
        }
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
