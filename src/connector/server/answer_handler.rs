use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};

use super::app::AppState;
use super::validation::{validate_answer_request, RequestRejection};
use crate::domain::ResponseEnvelope;

/// `/api/answer`: validate, dispatch on conversation type, answer with an envelope.
///
/// Every failure is turned into a 4xx envelope here; nothing reaches the transport layer
/// as an unhandled error.
pub async fn answer(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let validated = body
        .map_err(RequestRejection::from)
        .and_then(|body| validate_answer_request(&method, &body));

    let request = match validated {
        Ok(request) => request,
        Err(rejection) => {
            warn!("Rejected {} /api/answer: {}", method, rejection);
            return rejection.into_response();
        }
    };

    info!(
        "Incoming request: {} type={} messages={}",
        method,
        request.conversation_type,
        request.messages.len()
    );

    match state
        .converse
        .execute(&request.conversation_type, &request.messages)
        .await
    {
        Ok(choice) => (StatusCode::OK, Json(ResponseEnvelope::ok(choice))).into_response(),
        Err(e) => {
            warn!("Answer for type {} failed: {}", request.conversation_type, e);
            (
                StatusCode::BAD_REQUEST,
                Json(ResponseEnvelope::from_kind(e.api_kind())),
            )
                .into_response()
        }
    }
}
