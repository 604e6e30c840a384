use serde::{Deserialize, Serialize};

use super::Message;

/// Number of most recent messages forwarded to the completion call.
pub const DEFAULT_MEMORY_WINDOW: usize = 3;

/// Messages accumulated by one chat session, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// History to transmit with the next request. See [`filter_history`].
    pub fn filtered(&self) -> Vec<Message> {
        filter_history(&self.messages)
    }
}

/// Drops error markers, their neighbours, and the earlier entry of any same-role pair.
///
/// The last message is always kept so the turn just typed is never lost. Every other
/// entry survives only when neither it nor its successor is an error marker and the two
/// carry different roles.
pub fn filter_history(history: &[Message]) -> Vec<Message> {
    let last = history.len().saturating_sub(1);

    history
        .iter()
        .enumerate()
        .filter(|(i, current)| {
            if *i == last {
                return true;
            }
            let next = &history[i + 1];
            !current.is_error() && !next.is_error() && current.role() != next.role()
        })
        .map(|(_, message)| message.clone())
        .collect()
}

/// The last `min(len, window)` messages, in order.
pub fn memory_window(history: &[Message], window: usize) -> &[Message] {
    &history[history.len().saturating_sub(window)..]
}
