use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::AnswerTransport;
use crate::domain::{
    failure_message, AnswerRequest, ConversationHistory, ConversationType, DomainError, Message,
    ResponseEnvelope,
};

/// Fixed deadline for one answer round trip.
pub const DEFAULT_ANSWER_TIMEOUT: Duration = Duration::from_secs(20);

/// Whether the session accepts new input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Idle,
    Disabled,
}

/// Client-side conversation manager. Owns the in-memory history of one chat.
pub struct ChatSession {
    id: String,
    conversation_type: ConversationType,
    history: ConversationHistory,
    input_state: InputState,
    transport: Arc<dyn AnswerTransport>,
    timeout: Duration,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn AnswerTransport>, conversation_type: ConversationType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            conversation_type,
            history: ConversationHistory::new(),
            input_state: InputState::Idle,
            transport,
            timeout: DEFAULT_ANSWER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn input_state(&self) -> InputState {
        self.input_state
    }

    /// Record the user's turn, send the filtered history and append the reply.
    ///
    /// Returns `None` for empty input, which is ignored. Every failure ends up as an
    /// error marker in the history; input is re-enabled on both paths, and also when the
    /// returned future is dropped before the reply arrives.
    pub async fn submit(&mut self, input: &str) -> Option<&Message> {
        if input.is_empty() {
            return None;
        }

        self.history.push(Message::user(input));
        let request = AnswerRequest::new(self.history.filtered(), self.conversation_type.as_str());
        debug!(
            "Session {} sending {} of {} messages",
            self.id,
            request.messages.len(),
            self.history.len()
        );

        let pending = PendingTurn::begin(&mut self.history, &mut self.input_state);
        let reply = match round_trip(self.transport.as_ref(), self.timeout, &request).await {
            Ok(envelope) => envelope.into_display_message(),
            Err(e) => {
                warn!("Session {}: answer request failed: {}", self.id, e);
                failure_message()
            }
        };
        pending.settle(reply);

        self.history.last()
    }
}

async fn round_trip(
    transport: &dyn AnswerTransport,
    timeout: Duration,
    request: &AnswerRequest,
) -> Result<ResponseEnvelope, DomainError> {
    tokio::time::timeout(timeout, transport.send(request))
        .await
        .map_err(|_| DomainError::Timeout(timeout))?
}

/// Input stays disabled while a turn is in flight. Dropping an unsettled turn records
/// the generic failure marker so the user turn never sits in history without a reply.
struct PendingTurn<'a> {
    history: &'a mut ConversationHistory,
    input_state: &'a mut InputState,
    settled: bool,
}

impl<'a> PendingTurn<'a> {
    fn begin(history: &'a mut ConversationHistory, input_state: &'a mut InputState) -> Self {
        *input_state = InputState::Disabled;
        Self {
            history,
            input_state,
            settled: false,
        }
    }

    fn settle(mut self, reply: Message) {
        self.history.push(reply);
        self.settled = true;
    }
}

impl Drop for PendingTurn<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Answer request abandoned before a reply arrived");
            self.history.push(failure_message());
        }
        *self.input_state = InputState::Idle;
    }
}
