use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    layout::ConfigLayout,
    model::{config::ConfigField, Model},
};

pub fn render(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let layout = ConfigLayout::new(rect);

    render_form(frame, model, layout.form);
    render_output(frame, model, layout.output);
}

fn render_form(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let text_field = |label: &str, value: &str, field: ConfigField| {
        field_line(label, value.to_owned(), field, model.config.focus)
    };
    let toggle = |label: &str, value: bool, field: ConfigField| {
        let rendered = if value { "[x]" } else { "[ ]" };
        field_line(label, rendered.to_owned(), field, model.config.focus)
    };

    let lines = vec![
        text_field("App Name", &model.config.app_name, ConfigField::AppName),
        text_field(
            "Window Title",
            &model.config.window_title,
            ConfigField::WindowTitle,
        ),
        text_field(
            "Identifier",
            &model.config.identifier,
            ConfigField::Identifier,
        ),
        text_field("Width", &model.config.width, ConfigField::Width),
        text_field("Height", &model.config.height, ConfigField::Height),
        toggle(
            "Fullscreen",
            model.config.fullscreen,
            ConfigField::Fullscreen,
        ),
        toggle("Resizable", model.config.resizable, ConfigField::Resizable),
        toggle(
            "Relaxed CSP",
            model.config.security_relaxed,
            ConfigField::SecurityRelaxed,
        ),
        Line::default(),
        Line::from(Span::styled(
            "enter generates, space toggles, arrows move",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Parameters "));

    frame.render_widget(paragraph, rect);
}

fn field_line(label: &str, value: String, field: ConfigField, focus: ConfigField) -> Line<'static> {
    let style = if field == focus {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{:<14}", label), style),
        Span::styled(value, style),
    ])
}

fn render_output(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let text = if model.config.generating {
        "Generating...".to_owned()
    } else {
        model
            .config
            .output
            .clone()
            .unwrap_or_else(|| "Waiting for generation...".to_owned())
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tauri.conf.json "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, rect);
}
