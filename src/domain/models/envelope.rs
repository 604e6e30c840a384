use serde::{Deserialize, Serialize};

use super::{CompletionChoice, Message};
use crate::domain::ApiErrorKind;

pub const RETRY_LATER_MESSAGE: &str = "Error while processing the request. Please try again later.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Body of `POST /api/answer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub messages: Vec<Message>,
    #[serde(rename = "type")]
    pub conversation_type: String,
}

impl AnswerRequest {
    pub fn new(messages: Vec<Message>, conversation_type: impl Into<String>) -> Self {
        Self {
            messages,
            conversation_type: conversation_type.into(),
        }
    }
}

/// Uniform success/failure wrapper returned by the answer endpoint.
///
/// Deserialization is lenient: every field may be missing, so a client can normalize
/// partial or foreign bodies instead of failing on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CompletionChoice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ResponseEnvelope {
    pub fn ok(choice: CompletionChoice) -> Self {
        Self {
            success: true,
            data: Some(choice),
            ..Default::default()
        }
    }

    pub fn failure(error_type: impl Into<String>, error_message: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error_type: Some(error_type.into()),
            error_message,
        }
    }

    pub fn from_kind(kind: ApiErrorKind) -> Self {
        Self::failure(kind.as_str(), Some(kind.message().to_string()))
    }

    /// The message to append to the visible history for this response.
    ///
    /// A present `data.message` passes through untouched; every other outcome becomes an
    /// error marker.
    pub fn into_display_message(self) -> Message {
        if let Some(message) = self.data.and_then(|d| d.message) {
            return message;
        }

        match self.error_type.as_deref().and_then(ApiErrorKind::from_tag) {
            Some(ApiErrorKind::OpenAiError) => Message::error(RETRY_LATER_MESSAGE),
            _ => failure_message(),
        }
    }
}

/// Display message for a request that produced no envelope at all
/// (network failure, timeout, undecodable body).
pub fn failure_message() -> Message {
    Message::error(GENERIC_FAILURE_MESSAGE)
}
