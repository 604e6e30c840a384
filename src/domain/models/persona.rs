use std::str::FromStr;

use serde::Serialize;

use super::Message;
use crate::domain::DomainError;

/// System prompt and sampling parameters for one conversation type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UseCaseConfig {
    pub system_prompt: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub type_tag: &'static str,
}

impl UseCaseConfig {
    pub fn system_message(&self) -> Message {
        Message::system(self.system_prompt)
    }
}

pub const SIMPLE_ASSISTANT: UseCaseConfig = UseCaseConfig {
    system_prompt: "You are a simple assistant. You respond with simple sentences.",
    temperature: 1.0,
    max_tokens: 50,
    type_tag: "simple_assistant",
};

pub const MICHAEL_SCOTT: UseCaseConfig = UseCaseConfig {
    system_prompt: "You are pretending to be Michael Scott from The Office. You try to be funny, occasionally making \"That's what she said\" jokes.",
    temperature: 1.0,
    max_tokens: 100,
    type_tag: "michael_scott",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversationType {
    SimpleAssistant,
    MichaelScott,
}

impl ConversationType {
    pub const ALL: [ConversationType; 2] =
        [ConversationType::SimpleAssistant, ConversationType::MichaelScott];

    pub fn config(&self) -> &'static UseCaseConfig {
        match self {
            ConversationType::SimpleAssistant => &SIMPLE_ASSISTANT,
            ConversationType::MichaelScott => &MICHAEL_SCOTT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.config().type_tag
    }
}

impl FromStr for ConversationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::wrong_conversation_type(s))
    }
}

impl std::fmt::Display for ConversationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
