use std::time::Duration;

use nexus_gateway::{Gateway, GatewayConfig};

use action::ActionResult;
use error::AppError;
use event::Emitter;
use layout::AppLayout;
use model::Model;
use settings::Settings;
use terminal::TerminalWrapper;
use update::update_model;
use view::render_model;

mod action;
pub mod error;
mod event;
mod layout;
mod model;
pub mod settings;
mod task;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    // resolve credentials before touching the terminal, a missing key
    // should fail on stderr instead of inside the alternate screen
    let gateway = Gateway::new(GatewayConfig::from_env()?)?;

    let mut model = Model::new(settings);
    model.graph.data.validate()?;

    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start(
        gateway,
        Duration::from_millis(model.settings.tick_rate_ms),
    );

    tracing::debug!("starting with model state: {:?}", model);

    let mut result = Vec::new();
    while let Some(envelope) = emitter.receiver.recv().await {
        tracing::trace!(
            source = ?envelope.source,
            "received messages: {:?}",
            envelope.messages
        );

        model.layout = AppLayout::new(terminal.size()?);

        let actions = update_model(&mut model, envelope);
        let exec = action::exec(&mut emitter, &mut terminal, actions).await?;

        if exec == ActionResult::Quit {
            break;
        }

        if exec != ActionResult::SkipRender {
            render_model(&mut terminal, &model)?;
        }
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    terminal.shutdown()?;

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}
