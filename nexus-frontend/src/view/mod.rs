use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{error::AppError, model::{AppMode, Model}, terminal::TerminalWrapper};

mod chat;
mod config;
mod graph;
mod statusline;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| render(frame, model))
}

fn render(frame: &mut Frame<'_>, model: &Model) {
    render_header(frame, model, model.layout.header);

    match model.mode {
        AppMode::Chat => chat::render(frame, model, model.layout.main),
        AppMode::Architecture => graph::render(frame, model, model.layout.main),
        AppMode::ConfigGen => config::render(frame, model, model.layout.main),
    }

    statusline::render(frame, model, model.layout.statusline);
}

fn render_header(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let tab = |label: &str, mode: AppMode| {
        let style = if model.mode == mode {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Span::styled(format!(" {} ", label), style)
    };

    let line = Line::from(vec![
        Span::styled(" TAURI NEXUS ", Style::default().add_modifier(Modifier::BOLD)),
        tab("F1 Chat", AppMode::Chat),
        Span::raw(" "),
        tab("F2 Architecture", AppMode::Architecture),
        Span::raw(" "),
        tab("F3 Config", AppMode::ConfigGen),
    ]);

    frame.render_widget(Paragraph::new(line), rect);
}
