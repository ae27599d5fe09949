mod assistant;
mod lobby;
mod quiz;
mod result;
mod snippet;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::state::View;

/// Width of the assistant column on the right.
const ASSISTANT_WIDTH: u16 = 38;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let [main, side] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(ASSISTANT_WIDTH)]).areas(area);

    match app.view() {
        View::Lobby => lobby::render(frame, main, app),
        View::Quiz => quiz::render(frame, main, app),
        View::Summary => result::render(frame, main, app),
        View::Snippet(_) => snippet::render(frame, main, app),
    }

    assistant::render(frame, side, app.assistant());
}

pub(crate) fn controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
