use ratatui::{
    prelude::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{AppMode, Model};

pub fn render(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let line = match &model.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            hint(model.mode),
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), rect);
}

fn hint(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Chat => " enter sends, esc cancels a running answer, tab switches view",
        AppMode::Architecture => {
            " click or n/p selects a node, drag rearranges, q quits, tab switches view"
        }
        AppMode::ConfigGen => " enter generates the config, tab switches view",
    }
}
