use thiserror::Error;

/// Closed set of error kinds a caller of `/api/answer` can observe.
///
/// `DatabaseError` and `WrongLanguage` are never produced by this crate; they stay in the
/// enumeration because clients match on the full set of wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    DatabaseError,
    WrongLanguage,
    WrongConversationType,
    OpenAiError,
}

impl ApiErrorKind {
    pub const ALL: [ApiErrorKind; 4] = [
        ApiErrorKind::DatabaseError,
        ApiErrorKind::WrongLanguage,
        ApiErrorKind::WrongConversationType,
        ApiErrorKind::OpenAiError,
    ];

    /// Wire tag sent as `error_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::DatabaseError => "database_error",
            ApiErrorKind::WrongLanguage => "wrong_language",
            ApiErrorKind::WrongConversationType => "wrong_conversation_type",
            ApiErrorKind::OpenAiError => "open_ai_error",
        }
    }

    /// Fixed human-readable message sent as `error_message`.
    pub fn message(&self) -> &'static str {
        match self {
            ApiErrorKind::DatabaseError => "Error while processing the request.",
            ApiErrorKind::WrongLanguage => "The language of the input is not the desired one.",
            ApiErrorKind::WrongConversationType => "The conversation type is not known.",
            ApiErrorKind::OpenAiError => "Error while processing the request.",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unknown conversation type: {0}")]
    WrongConversationType(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),
}

impl DomainError {
    pub fn wrong_conversation_type(tag: impl Into<String>) -> Self {
        Self::WrongConversationType(tag.into())
    }

    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn is_wrong_conversation_type(&self) -> bool {
        matches!(self, Self::WrongConversationType(_))
    }

    /// The kind reported to HTTP callers. Anything that is not a dispatch failure
    /// surfaces as a completion failure; upstream detail stays in the logs.
    pub fn api_kind(&self) -> ApiErrorKind {
        match self {
            Self::WrongConversationType(_) => ApiErrorKind::WrongConversationType,
            _ => ApiErrorKind::OpenAiError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_tag() {
        for kind in ApiErrorKind::ALL {
            assert_eq!(ApiErrorKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(ApiErrorKind::from_tag("Missing input"), None);
    }

    #[test]
    fn reserved_kinds_keep_their_wire_shape() {
        assert_eq!(ApiErrorKind::DatabaseError.as_str(), "database_error");
        assert_eq!(ApiErrorKind::WrongLanguage.as_str(), "wrong_language");
        assert_eq!(
            ApiErrorKind::WrongLanguage.message(),
            "The language of the input is not the desired one."
        );
    }

    #[test]
    fn only_dispatch_failures_map_to_wrong_conversation_type() {
        assert_eq!(
            DomainError::wrong_conversation_type("unknown_x").api_kind(),
            ApiErrorKind::WrongConversationType
        );
        assert_eq!(
            DomainError::completion("upstream 500").api_kind(),
            ApiErrorKind::OpenAiError
        );
        assert_eq!(
            DomainError::Timeout(std::time::Duration::from_secs(20)).api_kind(),
            ApiErrorKind::OpenAiError
        );
        assert_eq!(
            DomainError::transport("connection refused").api_kind(),
            ApiErrorKind::OpenAiError
        );
    }
}
