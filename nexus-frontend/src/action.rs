use crate::{
    error::AppError,
    event::{Emitter, Message},
    task::Task,
    terminal::TerminalWrapper,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Abort(Task),
    EmitMessages(Vec<Message>),
    Quit,
    Resize(u16, u16),
    SkipRender,
    Task(Task),
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Continue,
    Quit,
    SkipRender,
}

pub async fn exec(
    emitter: &mut Emitter,
    terminal: &mut TerminalWrapper,
    actions: Vec<Action>,
) -> Result<ActionResult, AppError> {
    let mut result = ActionResult::Continue;
    for action in actions {
        match action {
            Action::Abort(task) => emitter.abort(&task),
            Action::EmitMessages(messages) => {
                emitter.run(Task::EmitMessages(messages));
            }
            Action::Quit => return Ok(ActionResult::Quit),
            Action::Resize(x, y) => terminal.resize(x, y)?,
            Action::SkipRender => {
                if result == ActionResult::Continue {
                    result = ActionResult::SkipRender;
                }
            }
            Action::Task(task) => emitter.run(task),
        }
    }

    Ok(result)
}
