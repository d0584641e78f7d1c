use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    action::Action,
    event::{Envelope, Message},
    model::{AppMode, Model},
};

mod chat;
mod config;
mod graph;

pub fn update_model(model: &mut Model, envelope: Envelope) -> Vec<Action> {
    envelope
        .messages
        .into_iter()
        .flat_map(|message| update(model, message))
        .collect()
}

fn update(model: &mut Model, message: Message) -> Vec<Action> {
    match message {
        Message::ChatChunk { id, text } => chat::chunk(model, id, &text),
        Message::ChatSettled { id } => chat::settled(model, id),
        Message::ConfigGenerated(result) => config::generated(model, result),
        Message::ExplanationLoaded { node, text } => graph::explanation_loaded(model, &node, text),
        Message::Key(key) => on_key(model, key),
        Message::Mouse(mouse) => match model.mode {
            AppMode::Architecture => graph::on_mouse(model, mouse),
            _ => vec![Action::SkipRender],
        },
        Message::Resize(x, y) => vec![Action::Resize(x, y)],
        Message::SimulationTick => graph::tick(model),
    }
}

fn on_key(model: &mut Model, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Tab => {
            model.mode = model.mode.next();
            model.status = None;
            Vec::new()
        }
        KeyCode::BackTab => {
            model.mode = model.mode.previous();
            model.status = None;
            Vec::new()
        }
        KeyCode::F(1) => {
            model.mode = AppMode::Chat;
            Vec::new()
        }
        KeyCode::F(2) => {
            model.mode = AppMode::Architecture;
            Vec::new()
        }
        KeyCode::F(3) => {
            model.mode = AppMode::ConfigGen;
            Vec::new()
        }
        _ => match model.mode {
            AppMode::Chat => chat::on_key(model, key),
            AppMode::Architecture => graph::on_key(model, key),
            AppMode::ConfigGen => config::on_key(model, key),
        },
    }
}
