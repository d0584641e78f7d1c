use nexus_gateway::{ConfigParams, Gateway, Turn};
use tokio::{
    sync::mpsc::Sender,
    task::{AbortHandle, JoinSet},
};
use tracing::error;

use crate::{error::AppError, event::Message};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Task {
    EmitMessages(Vec<Message>),
    ExplainNode {
        id: String,
        label: String,
    },
    GenerateConfig(ConfigParams),
    StreamChat {
        message_id: u64,
        transcript: Vec<Turn>,
        text: String,
    },
}

pub struct TaskManager {
    abort_handles: Vec<(Task, AbortHandle)>,
    gateway: Gateway,
    sender: Sender<Vec<Message>>,
    tasks: JoinSet<Result<(), AppError>>,
}

impl TaskManager {
    pub fn new(sender: Sender<Vec<Message>>, gateway: Gateway) -> Self {
        Self {
            abort_handles: Vec::new(),
            gateway,
            sender,
            tasks: JoinSet::new(),
        }
    }

    pub fn run(&mut self, task: Task) {
        let abort_handle = match task.clone() {
            Task::EmitMessages(messages) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    let _ = sender.send(messages).await;
                    Ok(())
                })
            }
            Task::ExplainNode { id, label } => {
                let sender = self.sender.clone();
                let gateway = self.gateway.clone();
                self.tasks.spawn(async move {
                    let text = gateway.explain(&label).await;
                    let _ = sender
                        .send(vec![Message::ExplanationLoaded { node: id, text }])
                        .await;
                    Ok(())
                })
            }
            Task::GenerateConfig(params) => {
                let sender = self.sender.clone();
                let gateway = self.gateway.clone();
                self.tasks.spawn(async move {
                    let result = gateway
                        .generate_config(&params)
                        .await
                        .map_err(|err| err.to_string());

                    let _ = sender.send(vec![Message::ConfigGenerated(result)]).await;
                    Ok(())
                })
            }
            Task::StreamChat {
                message_id,
                transcript,
                text,
            } => {
                let sender = self.sender.clone();
                let gateway = self.gateway.clone();
                self.tasks.spawn(async move {
                    let mut stream = gateway.stream_chat(&transcript, &text).await;
                    while let Some(chunk) = stream.next().await {
                        if sender
                            .send(vec![Message::ChatChunk {
                                id: message_id,
                                text: chunk,
                            }])
                            .await
                            .is_err()
                        {
                            return Ok(());
                        }
                    }

                    let _ = sender.send(vec![Message::ChatSettled { id: message_id }]).await;
                    Ok(())
                })
            }
        };

        self.abort_handles.push((task, abort_handle));
    }

    pub fn abort(&mut self, task: &Task) {
        let mut remaining = Vec::new();
        for (current, abort_handle) in self.abort_handles.drain(..) {
            if &current == task {
                abort_handle.abort();
            } else {
                remaining.push((current, abort_handle));
            }
        }
        self.abort_handles = remaining;
    }

    pub async fn finishing(&mut self) -> Result<(), AppError> {
        for (_, abort_handle) in self.abort_handles.drain(..) {
            abort_handle.abort();
        }

        let mut errors = Vec::new();
        while let Some(task) = self.tasks.join_next().await {
            match task {
                Ok(Ok(())) => (),
                Ok(Err(error)) => {
                    error!("task failed: {:?}", error);
                    errors.push(error);
                }
                Err(error) => {
                    if !error.is_cancelled() {
                        error!("join failed: {:?}", error);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Aggregate(errors))
        }
    }
}
