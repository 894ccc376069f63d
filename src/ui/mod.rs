mod layout;
mod quiz;
mod results;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::session::SessionState;

pub use layout::Skin;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let content = layout::card(frame, area, app.skin());

    match app.state() {
        SessionState::Answering { .. } => quiz::render(frame, content, app),
        SessionState::Results { .. } => results::render(frame, content, app),
    }
}
