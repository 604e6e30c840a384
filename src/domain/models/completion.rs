use serde::{Deserialize, Serialize};

use super::{Message, UseCaseConfig};

/// Everything the completion service needs for one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionRequest {
    /// `[system prompt] ++ history` with the config's sampling parameters.
    pub fn for_persona(config: &UseCaseConfig, history: &[Message]) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(config.system_message());
        messages.extend_from_slice(history);

        Self {
            messages,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn last_user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role() == Some(super::Role::User))
            .map(|m| m.content())
    }
}

/// Top choice of a completion. Sent verbatim as the success envelope's `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionChoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl CompletionChoice {
    pub fn new(message: Message) -> Self {
        Self {
            index: Some(0),
            message: Some(message),
            finish_reason: None,
        }
    }

    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }
}
