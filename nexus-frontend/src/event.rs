use std::time::Duration;

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use nexus_gateway::Gateway;
use tokio::sync::mpsc::{self, Receiver};

use crate::{
    error::AppError,
    task::{Task, TaskManager},
};

#[derive(Debug)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub source: MessageSource,
}

#[derive(Debug, Eq, PartialEq)]
pub enum MessageSource {
    Task,
    Tick,
    User,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    ChatChunk { id: u64, text: String },
    ChatSettled { id: u64 },
    ConfigGenerated(Result<String, String>),
    ExplanationLoaded { node: String, text: String },
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    SimulationTick,
}

pub struct Emitter {
    tasks: TaskManager,
    pub receiver: Receiver<Envelope>,
}

impl Emitter {
    pub fn start(gateway: Gateway, tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel(1);

        let (task_sender, mut task_receiver) = mpsc::channel(1);
        let tasks = TaskManager::new(task_sender, gateway);

        let internal_sender = sender.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(tick_rate);
            loop {
                tokio::select! {
                    messages = task_receiver.recv() => {
                        match messages {
                            Some(messages) => {
                                let _ = internal_sender.send(Envelope {
                                    messages,
                                    source: MessageSource::Task,
                                }).await;
                            }
                            None => break,
                        }
                    }
                    _ = ticker.tick() => {
                        let _ = internal_sender.send(Envelope {
                            messages: vec![Message::SimulationTick],
                            source: MessageSource::Tick,
                        }).await;
                    }
                }
            }
        });

        start_crossterm_listener(sender);

        Self { tasks, receiver }
    }

    pub fn run(&mut self, task: Task) {
        self.tasks.run(task);
    }

    pub fn abort(&mut self, task: &Task) {
        self.tasks.abort(task);
    }

    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.tasks.finishing().await
    }
}

fn start_crossterm_listener(sender: mpsc::Sender<Envelope>) {
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();

        while let Some(Ok(event)) = reader.next().await {
            if let Some(envelope) = handle_crossterm_event(event) {
                if sender.send(envelope).await.is_err() {
                    break;
                }
            }
        }
    });
}

fn handle_crossterm_event(event: crossterm::event::Event) -> Option<Envelope> {
    let messages = match event {
        crossterm::event::Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            vec![Message::Key(key)]
        }
        crossterm::event::Event::Mouse(mouse) => vec![Message::Mouse(mouse)],
        crossterm::event::Event::Resize(x, y) => vec![Message::Resize(x, y)],
        crossterm::event::Event::FocusLost
        | crossterm::event::Event::FocusGained
        | crossterm::event::Event::Paste(_) => return None,
    };

    Some(Envelope {
        messages,
        source: MessageSource::User,
    })
}
