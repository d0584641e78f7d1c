use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::{
    action::Action,
    layout::GraphLayout,
    model::{AppMode, Model},
    task::Task,
};

// world units per simulation frame at the default tick rate
const TICK_DT: f32 = 0.035;

// hit test tolerance in world units
const HIT_RADIUS: f32 = 4.0;

pub fn on_key(model: &mut Model, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Esc => {
            model.graph.selected = None;
            model.graph.explanation = None;
            model.graph.loading_explanation = false;
            Vec::new()
        }
        KeyCode::Right | KeyCode::Char('n') => cycle_selection(model, 1),
        KeyCode::Left | KeyCode::Char('p') => cycle_selection(model, -1),
        _ => vec![Action::SkipRender],
    }
}

pub fn on_mouse(model: &mut Model, mouse: MouseEvent) -> Vec<Action> {
    let canvas = GraphLayout::new(model.layout.main).canvas;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = match cell_to_world(model, canvas, mouse.column, mouse.row) {
                Some(it) => it,
                None => return vec![Action::SkipRender],
            };

            match model.graph.layout.node_at(x, y, HIT_RADIUS) {
                Some(id) => {
                    model.graph.dragged = Some(id.clone());
                    select(model, id)
                }
                None => vec![Action::SkipRender],
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let id = match model.graph.dragged.clone() {
                Some(it) => it,
                None => return vec![Action::SkipRender],
            };

            if let Some((x, y)) = cell_to_world(model, canvas, mouse.column, mouse.row) {
                model.graph.layout.pin(&id, x, y);
                model.graph.reheat();
            }
            Vec::new()
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(id) = model.graph.dragged.take() {
                model.graph.layout.release(&id);
                model.graph.reheat();
                Vec::new()
            } else {
                vec![Action::SkipRender]
            }
        }
        _ => vec![Action::SkipRender],
    }
}

pub fn tick(model: &mut Model) -> Vec<Action> {
    if model.mode != AppMode::Architecture || model.graph.settled() {
        return vec![Action::SkipRender];
    }

    model.graph.tick(TICK_DT);
    Vec::new()
}

/// Apply a finished explanation, unless the selection moved on while the
/// request was in flight.
pub fn explanation_loaded(model: &mut Model, node: &str, text: String) -> Vec<Action> {
    if model.graph.selected.as_deref() != Some(node) {
        return vec![Action::SkipRender];
    }

    model.graph.explanation = Some(text);
    model.graph.loading_explanation = false;
    Vec::new()
}

fn select(model: &mut Model, id: String) -> Vec<Action> {
    let label = match model.graph.data.node(&id) {
        Some(node) => node.label.clone(),
        None => return vec![Action::SkipRender],
    };

    model.graph.selected = Some(id.clone());
    model.graph.explanation = None;
    model.graph.loading_explanation = true;

    vec![Action::Task(Task::ExplainNode { id, label })]
}

fn cycle_selection(model: &mut Model, direction: isize) -> Vec<Action> {
    let nodes = &model.graph.data.nodes;
    if nodes.is_empty() {
        return vec![Action::SkipRender];
    }

    let current = model
        .graph
        .selected
        .as_deref()
        .and_then(|id| nodes.iter().position(|node| node.id == id));

    let next = match current {
        Some(index) => (index as isize + direction).rem_euclid(nodes.len() as isize) as usize,
        None => 0,
    };

    let id = nodes[next].id.clone();
    select(model, id)
}

fn cell_to_world(model: &Model, canvas: Rect, column: u16, row: u16) -> Option<(f32, f32)> {
    if !canvas.contains(Position::new(column, row)) || canvas.width == 0 || canvas.height == 0 {
        return None;
    }

    let width = model.graph.layout.width();
    let height = model.graph.layout.height();

    let x = ((column - canvas.x) as f32 + 0.5) / canvas.width as f32 * width;
    // canvas rows grow downwards, world y grows upwards
    let y = height - ((row - canvas.y) as f32 + 0.5) / canvas.height as f32 * height;

    Some((x, y))
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use crate::{
        action::Action,
        layout::AppLayout,
        model::{AppMode, Model},
        settings::Settings,
        task::Task,
    };

    use super::{explanation_loaded, on_key, on_mouse, tick};

    fn architecture_model() -> Model {
        let mut model = Model::new(Settings::default());
        model.mode = AppMode::Architecture;
        model.layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        model
    }

    #[test]
    fn cycling_selection_requests_an_explanation() {
        let mut model = architecture_model();

        let actions = on_key(&mut model, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

        assert_eq!(model.graph.selected.as_deref(), Some("Tauri App"));
        assert!(model.graph.loading_explanation);
        assert!(model.graph.explanation.is_none());
        assert!(matches!(
            actions.as_slice(),
            [Action::Task(Task::ExplainNode { .. })]
        ));
    }

    #[test]
    fn explanation_applies_to_the_current_selection() {
        let mut model = architecture_model();
        on_key(&mut model, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

        explanation_loaded(&mut model, "Tauri App", "The entry point.".to_owned());

        assert_eq!(model.graph.explanation.as_deref(), Some("The entry point."));
        assert!(!model.graph.loading_explanation);
    }

    #[test]
    fn stale_explanation_is_dropped() {
        let mut model = architecture_model();
        on_key(&mut model, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        on_key(&mut model, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

        let actions = explanation_loaded(&mut model, "Tauri App", "stale".to_owned());

        assert_eq!(actions, vec![Action::SkipRender]);
        assert!(model.graph.explanation.is_none());
        assert!(model.graph.loading_explanation);
    }

    #[test]
    fn escape_clears_the_selection() {
        let mut model = architecture_model();
        on_key(&mut model, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));

        on_key(&mut model, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        assert!(model.graph.selected.is_none());
        assert!(model.graph.explanation.is_none());
    }

    #[test]
    fn ticks_outside_the_architecture_view_skip_render() {
        let mut model = architecture_model();
        model.mode = AppMode::Chat;

        assert_eq!(tick(&mut model), vec![Action::SkipRender]);
    }

    #[test]
    fn ticks_advance_the_simulation_until_settled() {
        let mut model = architecture_model();

        let before = model.graph.layout.positions();
        assert_eq!(tick(&mut model), Vec::new());
        assert_ne!(model.graph.layout.positions(), before);

        while !model.graph.settled() {
            tick(&mut model);
        }
        assert_eq!(tick(&mut model), vec![Action::SkipRender]);
    }

    #[test]
    fn mouse_down_outside_the_canvas_skips_render() {
        let mut model = architecture_model();

        let actions = on_mouse(
            &mut model,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 99,
                row: 20,
                modifiers: KeyModifiers::NONE,
            },
        );

        assert_eq!(actions, vec![Action::SkipRender]);
    }

    #[test]
    fn releasing_a_drag_reheats_the_simulation() {
        let mut model = architecture_model();
        model.graph.dragged = Some("WebView".to_owned());
        while !model.graph.settled() {
            tick(&mut model);
        }

        on_mouse(
            &mut model,
            MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column: 10,
                row: 10,
                modifiers: KeyModifiers::NONE,
            },
        );

        assert!(model.graph.dragged.is_none());
        assert!(!model.graph.settled());
    }
}
