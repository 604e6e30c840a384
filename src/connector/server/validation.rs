use axum::extract::rejection::BytesRejection;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

use crate::domain::{AnswerRequest, Message, ResponseEnvelope};

pub const MISSING_INPUT: &str = "Missing input";
pub const MISSING_TYPE: &str = "wrong_conversation_type";
pub const METHOD_NOT_ALLOWED: &str = "method_not_allowed";
pub const INVALID_INPUT: &str = "invalid_input";

/// Why an answer request was turned away before reaching the conversation handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestRejection {
    MissingMessages,
    MissingType,
    MethodNotAllowed(Method),
    MalformedMessages(String),
    /// The body could not be read at all (too large, or the stream failed).
    UnreadableBody { status: StatusCode, detail: String },
}

impl RequestRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestRejection::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            RequestRejection::UnreadableBody { status, .. } if status.is_client_error() => *status,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn envelope(&self) -> ResponseEnvelope {
        match self {
            RequestRejection::MissingMessages => ResponseEnvelope::failure(MISSING_INPUT, None),
            RequestRejection::MissingType => ResponseEnvelope::failure(MISSING_TYPE, None),
            RequestRejection::MethodNotAllowed(method) => ResponseEnvelope::failure(
                METHOD_NOT_ALLOWED,
                Some(format!("Method {} is not allowed; use POST.", method)),
            ),
            RequestRejection::MalformedMessages(_) => ResponseEnvelope::failure(
                INVALID_INPUT,
                Some("messages must be a list of chat messages.".to_string()),
            ),
            RequestRejection::UnreadableBody { .. } => ResponseEnvelope::failure(
                INVALID_INPUT,
                Some("The request body could not be read.".to_string()),
            ),
        }
    }
}

impl std::fmt::Display for RequestRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestRejection::MissingMessages => write!(f, "missing messages"),
            RequestRejection::MissingType => write!(f, "missing conversation type"),
            RequestRejection::MethodNotAllowed(method) => write!(f, "method {} not allowed", method),
            RequestRejection::MalformedMessages(detail) => write!(f, "malformed messages: {}", detail),
            RequestRejection::UnreadableBody { detail, .. } => write!(f, "unreadable body: {}", detail),
        }
    }
}

impl From<BytesRejection> for RequestRejection {
    fn from(rejection: BytesRejection) -> Self {
        RequestRejection::UnreadableBody {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for RequestRejection {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(self.envelope());
        if status == StatusCode::METHOD_NOT_ALLOWED {
            (status, [(header::ALLOW, "POST")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

/// Validate a raw answer request.
///
/// Checks run in a fixed order and the first failure wins: `messages` present, `type`
/// present, method is POST. A field is missing when it is absent, `null`, `false`, `0` or
/// `""`. A body that is not a JSON object counts as having no fields.
/// Message decoding happens last, once the request is known to be a well-formed POST.
pub fn validate_answer_request(
    method: &Method,
    body: &[u8],
) -> Result<AnswerRequest, RequestRejection> {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let messages = present(fields.get("messages"))
        .ok_or(RequestRejection::MissingMessages)?
        .clone();

    let conversation_type = match present(fields.get("type")) {
        None => return Err(RequestRejection::MissingType),
        Some(Value::String(tag)) => tag.clone(),
        // Non-string tags fall through to dispatch, which rejects them as unknown.
        Some(other) => other.to_string(),
    };

    if *method != Method::POST {
        return Err(RequestRejection::MethodNotAllowed(method.clone()));
    }

    let messages: Vec<Message> = serde_json::from_value(messages)
        .map_err(|e| RequestRejection::MalformedMessages(e.to_string()))?;

    Ok(AnswerRequest::new(messages, conversation_type))
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
