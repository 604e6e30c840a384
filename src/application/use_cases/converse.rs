use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::CompletionService;
use crate::domain::{
    memory_window, CompletionChoice, CompletionRequest, ConversationType, DomainError, Message,
    DEFAULT_MEMORY_WINDOW,
};

/// Server-side conversation handler: dispatch on type, bound the history, call the model.
pub struct ConverseUseCase {
    completion_service: Arc<dyn CompletionService>,
    memory_window: usize,
}

impl ConverseUseCase {
    pub fn new(completion_service: Arc<dyn CompletionService>) -> Self {
        Self {
            completion_service,
            memory_window: DEFAULT_MEMORY_WINDOW,
        }
    }

    pub fn with_memory_window(mut self, window: usize) -> Self {
        self.memory_window = window;
        self
    }

    pub fn memory_window(&self) -> usize {
        self.memory_window
    }

    /// Resolve `type_tag` and answer. An unknown tag fails before any completion call.
    pub async fn execute(
        &self,
        type_tag: &str,
        history: &[Message],
    ) -> Result<CompletionChoice, DomainError> {
        let conversation_type: ConversationType = type_tag.parse()?;
        self.converse(conversation_type, history).await
    }

    pub async fn converse(
        &self,
        conversation_type: ConversationType,
        history: &[Message],
    ) -> Result<CompletionChoice, DomainError> {
        let config = conversation_type.config();
        let window = memory_window(history, self.memory_window);

        if window.len() < history.len() {
            debug!(
                "Dropping {} messages outside the memory window of {}",
                history.len() - window.len(),
                self.memory_window
            );
        }

        let request = CompletionRequest::for_persona(config, window);

        let start_time = Instant::now();
        let choice = self.completion_service.complete(request).await?;

        info!(
            "Completion for {} via {} finished in {:?}",
            conversation_type,
            self.completion_service.model_name(),
            start_time.elapsed()
        );

        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockCompletion;
    use crate::domain::Role;

    fn use_case(mock: &Arc<MockCompletion>) -> ConverseUseCase {
        ConverseUseCase::new(mock.clone())
    }

    #[tokio::test]
    async fn simple_assistant_uses_its_sampling_parameters() {
        let mock = Arc::new(MockCompletion::new());
        use_case(&mock)
            .execute("simple_assistant", &[Message::user("Hi")])
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.max_tokens(), 50);
        assert_eq!(request.temperature(), 1.0);
    }

    #[tokio::test]
    async fn michael_scott_uses_its_sampling_parameters() {
        let mock = Arc::new(MockCompletion::new());
        use_case(&mock)
            .execute("michael_scott", &[Message::user("Hi")])
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.max_tokens(), 100);
        assert_eq!(request.temperature(), 1.0);
    }

    #[tokio::test]
    async fn unknown_type_never_calls_the_model() {
        let mock = Arc::new(MockCompletion::new());
        let err = use_case(&mock)
            .execute("unknown_x", &[Message::user("Hi")])
            .await
            .unwrap_err();

        assert!(err.is_wrong_conversation_type());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn history_is_truncated_and_prefixed_with_system_prompt() {
        let mock = Arc::new(MockCompletion::new());
        let history = vec![
            Message::user("1"),
            Message::assistant("2"),
            Message::user("3"),
            Message::assistant("4"),
            Message::user("5"),
        ];

        use_case(&mock).execute("michael_scott", &history).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.messages().len(), 4);
        assert_eq!(request.messages()[0].role(), Some(Role::System));
        assert_eq!(&request.messages()[1..], &history[2..]);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn custom_memory_window_is_honoured() {
        let mock = Arc::new(MockCompletion::new());
        let history = vec![Message::user("1"), Message::assistant("2"), Message::user("3")];

        use_case(&mock)
            .with_memory_window(1)
            .execute("simple_assistant", &history)
            .await
            .unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.messages(), &[
            crate::domain::SIMPLE_ASSISTANT.system_message(),
            Message::user("3")
        ]);
    }

    #[tokio::test]
    async fn completion_failure_propagates() {
        let mock = Arc::new(MockCompletion::failing());
        let err = use_case(&mock)
            .execute("simple_assistant", &[Message::user("Hi")])
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Completion(_)));
        assert_eq!(mock.calls(), 1);
    }
}
