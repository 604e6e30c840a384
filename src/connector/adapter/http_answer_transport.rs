use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::AnswerTransport;
use crate::domain::{AnswerRequest, DomainError, ResponseEnvelope};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
const ANSWER_PATH: &str = "/api/answer";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts answer requests to a running `chatrelay serve` instance.
///
/// The body is decoded as an envelope whatever the HTTP status: failures arrive as
/// 4xx responses carrying `error_type`. The overall deadline is enforced by the session.
pub struct HttpAnswerTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpAnswerTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), ANSWER_PATH);
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .unwrap_or_default(),
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnswerTransport for HttpAnswerTransport {
    async fn send(&self, request: &AnswerRequest) -> Result<ResponseEnvelope, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("request to {} failed: {e}", self.url)))?;

        debug!("Answer endpoint replied with {}", response.status());

        response
            .json::<ResponseEnvelope>()
            .await
            .map_err(|e| DomainError::transport(format!("undecodable answer body: {e}")))
    }
}
