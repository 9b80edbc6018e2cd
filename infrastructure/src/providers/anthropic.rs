//! Anthropic messages client

use super::http::{endpoint, send_json};
use crate::config::FileAnthropicConfig;
use async_trait::async_trait;
use fanout_application::{CompletionClient, CompletionError, CompletionRequest};
use fanout_domain::{ApiKey, ProviderKind};
use serde::Deserialize;
use serde_json::{Value, json};

const MESSAGES_PATH: &str = "v1/messages";

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Client for the Anthropic messages API.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    config: FileAnthropicConfig,
}

impl AnthropicClient {
    pub fn new(http: reqwest::Client, config: FileAnthropicConfig) -> Self {
        Self { http, config }
    }

    pub(crate) fn request_body(&self, request: &CompletionRequest) -> Value {
        json!({
            "model": self.config.model,
            "system": request.system,
            "messages": [
                { "role": "user", "content": request.user },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }
}

/// Concatenate the text blocks of a messages response.
pub(crate) fn extract_text(body: Value) -> Result<String, CompletionError> {
    let response: MessagesResponse = serde_json::from_value(body)
        .map_err(|e| CompletionError::InvalidResponse(format!("unexpected envelope: {}", e)))?;

    let text: String = response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .collect();

    if text.trim().is_empty() {
        return Err(CompletionError::InvalidResponse(format!(
            "no text content (stop_reason: {})",
            response.stop_reason.as_deref().unwrap_or("unknown")
        )));
    }
    Ok(text)
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError> {
        let url = endpoint(&self.config.base_url, MESSAGES_PATH);
        let builder = self
            .http
            .post(url)
            .header("x-api-key", api_key.expose())
            .header("anthropic-version", &self.config.api_version)
            .json(&self.request_body(request));

        extract_text(send_json(builder).await?)
    }
}
