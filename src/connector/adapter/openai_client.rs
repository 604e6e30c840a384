use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::CompletionService;
use crate::domain::{CompletionChoice, CompletionRequest, DomainError, Message, Role};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    #[serde(default)]
    index: u32,
    message: ApiChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    role: Role,
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API and compatible servers.
///
/// Configured from the environment:
///
/// | Variable          | Default                  |
/// |-------------------|--------------------------|
/// | `OPENAI_BASE_URL` | `https://api.openai.com` |
/// | `OPENAI_MODEL`    | `gpt-3.5-turbo`          |
/// | `OPENAI_API_KEY`  | `""` (empty)             |
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn from_env() -> Self {
        let base =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        if key.is_empty() {
            warn!("OPENAI_API_KEY is not set; completion requests will be unauthenticated");
        }
        Self::new(key, model, base)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Error markers are UI feedback and never reach the model.
    fn api_messages(messages: &[Message]) -> Vec<ApiMessage<'_>> {
        messages
            .iter()
            .filter_map(|message| match message.role() {
                Some(role) => Some(ApiMessage {
                    role: role.as_str(),
                    content: message.content(),
                }),
                None => {
                    debug!("Dropping error marker from completion payload");
                    None
                }
            })
            .collect()
    }

    fn into_choice(response: ApiResponse) -> Result<CompletionChoice, DomainError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::completion("OpenAiClient: response has no choices"))?;

        Ok(CompletionChoice {
            index: Some(choice.index),
            message: Some(Message::new(
                choice.message.role,
                choice.message.content.unwrap_or_default(),
            )),
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionChoice, DomainError> {
        let payload = ApiRequest {
            model: &self.model,
            messages: Self::api_messages(request.messages()),
            max_tokens: request.max_tokens(),
            temperature: request.temperature(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::completion(format!("OpenAiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::completion(format!(
                "OpenAiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::completion(format!("OpenAiClient: failed to parse response: {e}"))
        })?;

        Self::into_choice(api_response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MICHAEL_SCOTT;

    #[test]
    fn url_joins_base_and_path() {
        let client = OpenAiClient::new("key", "gpt-3.5-turbo", "http://localhost:8080/");
        assert_eq!(client.url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn payload_skips_error_markers() {
        let history = vec![Message::user("A"), Message::error("oops"), Message::user("B")];
        let request = CompletionRequest::for_persona(&MICHAEL_SCOTT, &history);
        let messages = OpenAiClient::api_messages(request.messages());

        let roles: Vec<&str> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec!["system", "user", "user"]);
    }

    #[test]
    fn payload_serializes_sampling_parameters() {
        let request = CompletionRequest::for_persona(&MICHAEL_SCOTT, &[Message::user("Hi")]);
        let payload = ApiRequest {
            model: "gpt-3.5-turbo",
            messages: OpenAiClient::api_messages(request.messages()),
            max_tokens: request.max_tokens(),
            temperature: request.temperature(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["max_tokens"], 100);
        assert_eq!(value["temperature"], 1.0);
        assert_eq!(value["messages"][1]["content"], "Hi");
    }

    #[test]
    fn top_choice_is_extracted() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hi"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "Other"}}
            ]}"#,
        )
        .unwrap();

        let choice = OpenAiClient::into_choice(response).unwrap();
        assert_eq!(choice.message, Some(Message::assistant("Hi")));
        assert_eq!(choice.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn empty_choices_is_a_completion_error() {
        let response: ApiResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = OpenAiClient::into_choice(response).unwrap_err();
        assert!(matches!(err, DomainError::Completion(_)));
    }
}
