use async_trait::async_trait;

use crate::domain::{AnswerRequest, DomainError, ResponseEnvelope};

/// Client-side link to the answer endpoint.
#[async_trait]
pub trait AnswerTransport: Send + Sync {
    /// Post one request and decode whatever envelope comes back, regardless of status.
    async fn send(&self, request: &AnswerRequest) -> Result<ResponseEnvelope, DomainError>;
}
