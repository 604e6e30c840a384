use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tag value of an error marker (`"type": "error"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Error,
}

/// One entry of a conversation.
///
/// Serializes either as `{"role": ..., "content": ...}` for a conversational turn or as
/// `{"type": "error", "content": ...}` for UI error feedback. Error markers are never part
/// of the dialogue the model sees.
///
/// Any entry tagged `"type": "error"` decodes as a marker, even when it also carries a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    // Tried first; untagged variants are matched in declaration order.
    Error {
        #[serde(rename = "type")]
        kind: MarkerKind,
        content: String,
    },
    Turn {
        role: Role,
        content: String,
    },
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message::Turn {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Message::Error {
            kind: MarkerKind::Error,
            content: content.into(),
        }
    }

    /// `None` for error markers.
    pub fn role(&self) -> Option<Role> {
        match self {
            Message::Turn { role, .. } => Some(*role),
            Message::Error { .. } => None,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::Turn { content, .. } | Message::Error { content, .. } => content,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Message::Error { .. })
    }

    pub fn speaker_label(&self) -> &'static str {
        match self {
            Message::Turn {
                role: Role::Assistant,
                ..
            } => "Bot:",
            Message::Turn {
                role: Role::System, ..
            } => "System:",
            Message::Turn { role: Role::User, .. } => "You:",
            Message::Error { .. } => "Error:",
        }
    }

    pub fn display_line(&self) -> String {
        format!("{} {}", self.speaker_label(), self.content())
    }
}
