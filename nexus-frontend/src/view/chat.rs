use nexus_gateway::Role;
use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{layout::ChatLayout, model::Model};

pub fn render(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let layout = ChatLayout::new(rect);

    render_transcript(frame, model, layout.transcript);
    render_input(frame, model, layout.input);
}

fn render_transcript(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let mut lines = Vec::new();
    for message in &model.chat.transcript {
        let (name, style) = match message.role {
            Role::User => ("YOU", Style::default().fg(Color::Cyan)),
            Role::Model => ("NEXUS AI", Style::default().fg(Color::Yellow)),
        };

        lines.push(Line::from(Span::styled(
            name,
            style.add_modifier(Modifier::BOLD),
        )));

        for (index, text_line) in message.content.lines().enumerate() {
            let mut spans = vec![Span::raw(text_line.to_owned())];
            if message.is_streaming && index == message.content.lines().count() - 1 {
                spans.push(Span::styled("\u{258c}", Style::default().fg(Color::Yellow)));
            }
            lines.push(Line::from(spans));
        }

        if message.content.is_empty() && message.is_streaming {
            lines.push(Line::from(Span::styled(
                "\u{258c}",
                Style::default().fg(Color::Yellow),
            )));
        }

        lines.push(Line::default());
    }

    // keep the latest lines visible, offset by manual scrolling
    let height = rect.height.saturating_sub(2);
    let offset = (lines.len() as u16)
        .saturating_sub(height)
        .saturating_sub(model.chat.scroll);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Transcript "))
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));

    frame.render_widget(paragraph, rect);
}

fn render_input(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let cursor = if model.chat.in_flight.is_some() {
        Span::styled(
            " (streaming, esc to cancel)",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled("\u{258c}", Style::default().fg(Color::Cyan))
    };

    let line = Line::from(vec![Span::raw(model.chat.input.clone()), cursor]);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Message "));

    frame.render_widget(paragraph, rect);
}
