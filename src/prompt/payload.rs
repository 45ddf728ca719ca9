//! Instruction payload for the downstream text-generation service.
//!
//! Only the shape is defined here. Sending it is the caller's business.

use crate::config::Config;
use crate::error::{MissionError, Result};
use serde::{Deserialize, Serialize};

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A chat-completion request body carrying one rendered mission prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub model: String,
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
}

impl ChatPayload {
    /// Wrap a rendered prompt with the configured model and system instruction.
    pub fn new(config: &Config, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: config.system_prompt.clone(),
                },
                ChatMessage {
                    role: Role::User,
                    content: prompt.into(),
                },
            ],
        }
    }

    /// The user message content, i.e. the rendered prompt.
    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MissionError::UserError(format!("failed to serialize payload: {}", e)))
    }
}
