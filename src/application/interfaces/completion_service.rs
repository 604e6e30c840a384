use async_trait::async_trait;

use crate::domain::{CompletionChoice, CompletionRequest, DomainError};

/// Sends a shaped message list to a language model and returns its top choice.
///
/// Implementors own transport, serialization and vendor-specific API details so the
/// conversation handler stays independent of any provider or HTTP client library.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Perform exactly one completion call. No retries.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionChoice, DomainError>;

    fn model_name(&self) -> &str;
}
