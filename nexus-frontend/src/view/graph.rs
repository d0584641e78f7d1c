use nexus_graph::NodeKind;
use ratatui::{
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::{layout::GraphLayout, model::Model};

pub fn render(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let layout = GraphLayout::new(rect);

    render_canvas(frame, model, layout.canvas);
    render_panel(frame, model, layout.panel);
}

fn kind_color(kind: NodeKind) -> Color {
    match kind {
        NodeKind::Core => Color::Rgb(255, 193, 49),
        NodeKind::Rust => Color::Rgb(255, 142, 49),
        NodeKind::Js => Color::Rgb(36, 200, 219),
        NodeKind::Bridge => Color::Gray,
    }
}

fn render_canvas(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let width = model.graph.layout.width() as f64;
    let height = model.graph.layout.height() as f64;

    let canvas = Canvas::default()
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for ((x1, y1), (x2, y2)) in model.graph.layout.edge_endpoints() {
                ctx.draw(&CanvasLine {
                    x1: x1 as f64,
                    y1: y1 as f64,
                    x2: x2 as f64,
                    y2: y2 as f64,
                    color: Color::DarkGray,
                });
            }

            ctx.layer();

            for position in model.graph.layout.positions() {
                let node = match model.graph.data.node(&position.id) {
                    Some(it) => it,
                    None => continue,
                };

                let selected = model.graph.selected.as_deref() == Some(position.id.as_str());
                let color = if selected {
                    Color::White
                } else {
                    kind_color(node.kind)
                };

                ctx.draw(&Circle {
                    x: position.x as f64,
                    y: position.y as f64,
                    radius: (node.radius() / 4.0) as f64,
                    color,
                });

                ctx.print(
                    position.x as f64,
                    position.y as f64 + (node.radius() / 3.0) as f64,
                    Span::styled(node.label.clone(), Style::default().fg(color)),
                );
            }
        });

    frame.render_widget(canvas, rect);
}

fn render_panel(frame: &mut Frame<'_>, model: &Model, rect: Rect) {
    let mut lines = Vec::new();

    match (&model.graph.selected, &model.graph.explanation) {
        (Some(id), _) if model.graph.loading_explanation => {
            push_title(&mut lines, model, id);
            lines.push(Line::from(Span::styled(
                "Consulting model...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        (Some(id), Some(explanation)) => {
            push_title(&mut lines, model, id);
            for text_line in explanation.lines() {
                lines.push(Line::from(text_line.to_owned()));
            }
        }
        _ => {
            lines.push(Line::from(Span::styled(
                "Click a node or cycle with n/p to inspect it.",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::default());
    for (label, kind) in [
        ("core", NodeKind::Core),
        ("rust", NodeKind::Rust),
        ("js", NodeKind::Js),
        ("bridge", NodeKind::Bridge),
    ] {
        lines.push(Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(kind_color(kind))),
            Span::raw(label),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Node Details "))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, rect);
}

fn push_title(lines: &mut Vec<Line<'_>>, model: &Model, id: &str) {
    let label = model
        .graph
        .data
        .node(id)
        .map(|node| node.label.clone())
        .unwrap_or_else(|| id.to_owned());

    lines.push(Line::from(Span::styled(
        label,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
}
