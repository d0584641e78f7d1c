use crossterm::event::{KeyCode, KeyEvent};
use serde_json::Value;

use crate::{
    action::Action,
    model::{config::CONFIG_ERROR_PLACEHOLDER, Model},
    task::Task,
};

pub fn on_key(model: &mut Model, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => generate(model),
        KeyCode::Up => {
            model.config.focus = model.config.focus.previous();
            Vec::new()
        }
        KeyCode::Down => {
            model.config.focus = model.config.focus.next();
            Vec::new()
        }
        KeyCode::Char(' ') if model.config.focus.is_toggle() => {
            model.config.toggle_focused();
            Vec::new()
        }
        KeyCode::Backspace => {
            if let Some(buffer) = model.config.buffer_mut() {
                buffer.pop();
            }
            Vec::new()
        }
        KeyCode::Char(c) => {
            if let Some(buffer) = model.config.buffer_mut() {
                buffer.push(c);
            }
            Vec::new()
        }
        _ => vec![Action::SkipRender],
    }
}

fn generate(model: &mut Model) -> Vec<Action> {
    if model.config.generating {
        return vec![Action::SkipRender];
    }

    model.config.generating = true;
    model.config.output = None;

    vec![Action::Task(Task::GenerateConfig(model.config.params()))]
}

pub fn generated(model: &mut Model, result: Result<String, String>) -> Vec<Action> {
    model.config.generating = false;

    match result {
        Ok(raw) => model.config.output = Some(prettify(raw)),
        Err(error) => {
            model.config.output = Some(CONFIG_ERROR_PLACEHOLDER.to_owned());
            model.status = Some(error);
        }
    }

    Vec::new()
}

// reformat when the payload parses, otherwise show it verbatim
fn prettify(raw: String) -> String {
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or(raw),
        Err(_) => raw,
    }
}
