pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AnswerTransport, ChatSession, CompletionService, ConverseUseCase, InputState,
    DEFAULT_ANSWER_TIMEOUT,
};

pub use cli::Commands;

pub use connector::{HttpAnswerTransport, MockCompletion, OpenAiClient};

pub use domain::{
    filter_history, memory_window, AnswerRequest, ApiErrorKind, CompletionChoice,
    CompletionRequest, ConversationHistory, ConversationType, DomainError, Message, ResponseEnvelope,
    Role, UseCaseConfig, DEFAULT_MEMORY_WINDOW,
};
