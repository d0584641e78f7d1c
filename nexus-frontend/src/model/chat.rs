use std::time::{SystemTime, UNIX_EPOCH};

use nexus_gateway::{Role, Turn};

use crate::task::Task;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: u128,
    pub is_streaming: bool,
}

#[derive(Debug)]
pub struct InFlightTurn {
    pub message_id: u64,
    pub task: Task,
}

#[derive(Debug)]
pub struct ChatModel {
    pub transcript: Vec<ChatMessage>,
    pub input: String,
    pub scroll: u16,
    pub in_flight: Option<InFlightTurn>,
    next_id: u64,
}

impl Default for ChatModel {
    fn default() -> Self {
        Self {
            transcript: vec![ChatMessage {
                id: 0,
                role: Role::Model,
                content: "Welcome to Tauri Nexus. I am ready to assist with your Rust, \
                          TypeScript, and Tauri architecture questions."
                    .to_owned(),
                timestamp: now_millis(),
                is_streaming: false,
            }],
            input: String::new(),
            scroll: 0,
            in_flight: None,
            next_id: 1,
        }
    }
}

impl ChatModel {
    pub fn push(&mut self, role: Role, content: String, is_streaming: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.transcript.push(ChatMessage {
            id,
            role,
            content,
            timestamp: now_millis(),
            is_streaming,
        });

        id
    }

    pub fn append_chunk(&mut self, id: u64, text: &str) -> bool {
        if let Some(message) = self.transcript.iter_mut().find(|msg| msg.id == id) {
            message.content.push_str(text);
            true
        } else {
            false
        }
    }

    pub fn settle(&mut self, id: u64) {
        if let Some(message) = self.transcript.iter_mut().find(|msg| msg.id == id) {
            message.is_streaming = false;
        }

        if self
            .in_flight
            .as_ref()
            .is_some_and(|turn| turn.message_id == id)
        {
            self.in_flight = None;
        }
    }

    // prior turns only, excluding the placeholder currently streaming
    pub fn turns(&self) -> Vec<Turn> {
        self.transcript
            .iter()
            .filter(|msg| !msg.is_streaming)
            .map(|msg| Turn {
                role: msg.role,
                text: msg.content.clone(),
            })
            .collect()
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or_default()
}
