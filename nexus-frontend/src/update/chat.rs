use crossterm::event::{KeyCode, KeyEvent};
use nexus_gateway::Role;

use crate::{
    action::Action,
    event::Message,
    model::{chat::InFlightTurn, Model},
    task::Task,
};

pub fn on_key(model: &mut Model, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => submit(model),
        KeyCode::Esc => cancel(model),
        KeyCode::Backspace => {
            model.chat.input.pop();
            Vec::new()
        }
        KeyCode::Up => {
            model.chat.scroll = model.chat.scroll.saturating_add(1);
            Vec::new()
        }
        KeyCode::Down => {
            model.chat.scroll = model.chat.scroll.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Char(c) => {
            model.chat.input.push(c);
            Vec::new()
        }
        _ => vec![Action::SkipRender],
    }
}

/// Send the drafted message. A no op while a previous turn is still
/// streaming or when the draft is blank.
fn submit(model: &mut Model) -> Vec<Action> {
    if model.chat.in_flight.is_some() {
        return vec![Action::SkipRender];
    }

    let text = model.chat.input.trim().to_owned();
    if text.is_empty() {
        return vec![Action::SkipRender];
    }
    model.chat.input.clear();
    model.chat.scroll = 0;

    // transcript snapshot excludes the turn being sent
    let transcript = model.chat.turns();

    model.chat.push(Role::User, text.clone(), false);
    let message_id = model.chat.push(Role::Model, String::new(), true);

    let task = Task::StreamChat {
        message_id,
        transcript,
        text,
    };
    model.chat.in_flight = Some(InFlightTurn {
        message_id,
        task: task.clone(),
    });

    vec![Action::Task(task)]
}

fn cancel(model: &mut Model) -> Vec<Action> {
    match &model.chat.in_flight {
        Some(turn) => vec![
            Action::Abort(turn.task.clone()),
            Action::EmitMessages(vec![Message::ChatSettled {
                id: turn.message_id,
            }]),
        ],
        None => vec![Action::SkipRender],
    }
}

pub fn chunk(model: &mut Model, id: u64, text: &str) -> Vec<Action> {
    if model.chat.append_chunk(id, text) {
        Vec::new()
    } else {
        vec![Action::SkipRender]
    }
}

pub fn settled(model: &mut Model, id: u64) -> Vec<Action> {
    model.chat.settle(id);
    Vec::new()
}

#[cfg(test)]
mod test {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use nexus_gateway::Role;

    use crate::{action::Action, event::Message, model::Model, settings::Settings, task::Task};

    use super::{chunk, on_key, settled};

    fn typed(model: &mut Model, text: &str) {
        for c in text.chars() {
            on_key(model, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn submit_pushes_user_turn_and_streaming_placeholder() {
        let mut model = Model::new(Settings::default());
        typed(&mut model, "how does ipc work?");

        let actions = on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::Task(Task::StreamChat { .. })));

        let transcript = &model.chat.transcript;
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].role, Role::User);
        assert_eq!(transcript[1].content, "how does ipc work?");
        assert_eq!(transcript[2].role, Role::Model);
        assert!(transcript[2].is_streaming);
        assert!(model.chat.input.is_empty());
        assert!(model.chat.in_flight.is_some());
    }

    #[test]
    fn submit_snapshot_excludes_the_turn_being_sent() {
        let mut model = Model::new(Settings::default());
        typed(&mut model, "hello");

        let actions = on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        match &actions[0] {
            Action::Task(Task::StreamChat {
                transcript, text, ..
            }) => {
                assert_eq!(text, "hello");
                // welcome message only; the new user turn travels in `text`
                assert_eq!(transcript.len(), 1);
                assert_eq!(transcript[0].role, Role::Model);
            }
            it => panic!("expected stream task, got {:?}", it),
        }
    }

    #[test]
    fn submit_is_a_no_op_on_blank_input() {
        let mut model = Model::new(Settings::default());
        typed(&mut model, "   ");

        let actions = on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(actions, vec![Action::SkipRender]);
        assert_eq!(model.chat.transcript.len(), 1);
    }

    #[test]
    fn submit_is_a_no_op_while_streaming() {
        let mut model = Model::new(Settings::default());
        typed(&mut model, "first");
        on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        typed(&mut model, "second");
        let actions = on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(actions, vec![Action::SkipRender]);
    }

    #[test]
    fn chunks_append_to_the_placeholder_in_order() {
        let mut model = Model::new(Settings::default());
        typed(&mut model, "hi");
        on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let id = model.chat.transcript.last().map(|msg| msg.id).unwrap();
        chunk(&mut model, id, "Hello ");
        chunk(&mut model, id, "there.");

        assert_eq!(
            model.chat.transcript.last().map(|msg| msg.content.as_str()),
            Some("Hello there.")
        );
    }

    #[test]
    fn chunk_for_unknown_message_skips_render() {
        let mut model = Model::new(Settings::default());

        assert_eq!(chunk(&mut model, 999, "late"), vec![Action::SkipRender]);
    }

    #[test]
    fn settled_clears_streaming_state() {
        let mut model = Model::new(Settings::default());
        typed(&mut model, "hi");
        on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let id = model.chat.transcript.last().map(|msg| msg.id).unwrap();
        settled(&mut model, id);

        assert!(model.chat.in_flight.is_none());
        assert!(!model.chat.transcript.last().unwrap().is_streaming);
    }

    #[test]
    fn escape_aborts_the_running_stream() {
        let mut model = Model::new(Settings::default());
        typed(&mut model, "hi");
        on_key(&mut model, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let id = model.chat.transcript.last().map(|msg| msg.id).unwrap();
        let actions = on_key(&mut model, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[0], Action::Abort(_)));
        assert_eq!(
            actions[1],
            Action::EmitMessages(vec![Message::ChatSettled { id }])
        );
    }

    #[test]
    fn escape_without_a_stream_skips_render() {
        let mut model = Model::new(Settings::default());

        let actions = on_key(&mut model, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

        assert_eq!(actions, vec![Action::SkipRender]);
    }
}
