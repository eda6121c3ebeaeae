use crate::error::ModelError;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "x-ai/grok-4.1-fast:free";

const MODEL_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Completion endpoint seam. The pipeline only depends on this trait, so
/// tests can swap in [`MockModel`].
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ModelError>;
}

/// OpenRouter chat-completions client.
pub struct OpenRouterClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder().timeout(MODEL_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: OPENROUTER_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatModel for OpenRouterClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ModelError> {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "reasoning": { "enabled": true },
        });

        let resp = self
            .client
            .post(&self.base_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ModelError::Status(status));
        }

        let parsed = resp.json::<CompletionResponse>().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ModelError::MalformedResponse)
    }
}

/// Deterministic model for tests: serves a scripted response (or a scripted
/// failure) and records every message list it receives.
#[derive(Debug, Clone)]
pub struct MockModel {
    response: String,
    fail: bool,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockModel {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A model whose every call fails at the gateway boundary.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            fail: true,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        if self.fail {
            return Err(ModelError::MalformedResponse);
        }
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_model_records_calls() {
        let model = MockModel::new("hello");
        assert_eq!(model.call_count(), 0);

        let messages = vec![ChatMessage::system("s"), ChatMessage::user("u")];
        let out = model.complete(&messages).await.unwrap();
        assert_eq!(out, "hello");
        assert_eq!(model.call_count(), 1);
        assert_eq!(model.last_messages().unwrap(), messages);
    }

    #[tokio::test]
    async fn mock_model_clones_share_call_count() {
        let model = MockModel::new("x");
        let clone = model.clone();
        clone.complete(&[ChatMessage::user("u")]).await.unwrap();
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn failing_mock_returns_gateway_error() {
        let model = MockModel::failing();
        let err = model.complete(&[ChatMessage::user("u")]).await.unwrap_err();
        assert!(matches!(err, ModelError::MalformedResponse));
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        let client = OpenRouterClient::new("key", DEFAULT_MODEL)
            .unwrap()
            .with_base_url("http://127.0.0.1:9/v1/chat/completions");
        let err = client.complete(&[ChatMessage::user("u")]).await.unwrap_err();
        assert!(matches!(err, ModelError::Request(_)));
    }
}
