use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::CompletionService;
use crate::domain::{CompletionChoice, CompletionRequest, DomainError, Message};

/// Offline completion service. Replies by echoing the latest user turn and records every
/// request it receives, so it doubles as a call-counting spy.
pub struct MockCompletion {
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
    fail: bool,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
            fail: false,
        }
    }

    /// A mock whose every call fails like an unreachable upstream.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionChoice, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let reply = format!(
            "You said: {}",
            request.last_user_content().unwrap_or_default()
        );

        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request);
        }

        if self.fail {
            return Err(DomainError::completion("mock completion failure"));
        }

        Ok(CompletionChoice::new(Message::assistant(reply)).with_finish_reason("stop"))
    }

    fn model_name(&self) -> &str {
        "mock-completion"
    }
}
