use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AnswerTransport, CompletionService, ConverseUseCase};
use crate::connector::server::AppState;
use crate::domain::DEFAULT_MEMORY_WINDOW;
use crate::{HttpAnswerTransport, MockCompletion, OpenAiClient};

pub struct ContainerConfig {
    /// Answer with [`MockCompletion`] instead of calling the completion API.
    pub mock_completion: bool,
    /// Number of most recent messages forwarded to the model.
    pub memory_window: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            mock_completion: false,
            memory_window: DEFAULT_MEMORY_WINDOW,
        }
    }
}

pub struct Container {
    completion_service: Arc<dyn CompletionService>,
    converse_use_case: Arc<ConverseUseCase>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let completion_service: Arc<dyn CompletionService> = if config.mock_completion {
            debug!("Using mock completion service");
            Arc::new(MockCompletion::new())
        } else {
            debug!("Using OpenAI completion service");
            Arc::new(OpenAiClient::from_env())
        };

        Ok(Self::with_completion_service(completion_service, config))
    }

    /// Wire the container around an already-built completion service.
    pub fn with_completion_service(
        completion_service: Arc<dyn CompletionService>,
        config: ContainerConfig,
    ) -> Self {
        let converse_use_case = Arc::new(
            ConverseUseCase::new(completion_service.clone())
                .with_memory_window(config.memory_window),
        );

        Self {
            completion_service,
            converse_use_case,
            config,
        }
    }

    pub fn converse_use_case(&self) -> Arc<ConverseUseCase> {
        self.converse_use_case.clone()
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.converse_use_case())
    }

    pub fn answer_transport(&self, server_url: &str) -> Arc<dyn AnswerTransport> {
        Arc::new(HttpAnswerTransport::new(server_url))
    }

    pub fn model_name(&self) -> &str {
        self.completion_service.model_name()
    }

    pub fn memory_window(&self) -> usize {
        self.config.memory_window
    }
}
