//! OpenAI chat completions client

use super::http::{endpoint, send_json};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use fanout_application::{CompletionClient, CompletionError, CompletionRequest};
use fanout_domain::{ApiKey, ProviderKind};
use serde::Deserialize;
use serde_json::{Value, json};

const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the OpenAI chat completions API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    config: FileOpenAiConfig,
}

impl OpenAiClient {
    pub fn new(http: reqwest::Client, config: FileOpenAiConfig) -> Self {
        Self { http, config }
    }

    /// Request body; asks for a JSON object reply when JSON mode is on.
    pub(crate) fn request_body(&self, request: &CompletionRequest) -> Value {
        let mut body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });
        if self.config.json_mode {
            body["response_format"] = json!({ "type": "json_object" });
        }
        body
    }
}

/// Extract the reply text from a chat completions response body.
pub(crate) fn extract_text(body: Value) -> Result<String, CompletionError> {
    let response: ChatResponse = serde_json::from_value(body)
        .map_err(|e| CompletionError::InvalidResponse(format!("unexpected envelope: {}", e)))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::InvalidResponse("no choices".to_string()))?;

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(CompletionError::InvalidResponse(format!(
            "empty content (finish_reason: {})",
            choice.finish_reason.as_deref().unwrap_or("unknown")
        ))),
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
        api_key: &ApiKey,
    ) -> Result<String, CompletionError> {
        let url = endpoint(&self.config.base_url, CHAT_COMPLETIONS_PATH);
        let builder = self
            .http
            .post(url)
            .bearer_auth(api_key.expose())
            .json(&self.request_body(request));

        extract_text(send_json(builder).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenAiClient {
        OpenAiClient::new(reqwest::Client::new(), FileOpenAiConfig::default())
    }

    #[test]
    fn test_request_body() {
        let body = client().request_body(&CompletionRequest::new("sys", "user prompt"));

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["content"], "user prompt");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["max_tokens"], 2000);
    }

    #[test]
    fn test_request_body_without_json_mode() {
        let config = FileOpenAiConfig {
            model: "gpt-4".to_string(),
            json_mode: false,
            ..FileOpenAiConfig::default()
        };
        let client = OpenAiClient::new(reqwest::Client::new(), config);

        let body = client.request_body(&CompletionRequest::new("sys", "user prompt"));

        assert_eq!(body["model"], "gpt-4");
        assert!(body.get("response_format").is_none());
        assert_eq!(body["messages"][1]["content"], "user prompt");
    }

    #[test]
    fn test_extract_text() {
        let body = json!({
            "id": "chatcmpl-1",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "{\"predictions\":[]}" },
                    "finish_reason": "stop"
                }
            ]
        });
        assert_eq!(extract_text(body).unwrap(), "{\"predictions\":[]}");
    }

    #[test]
    fn test_extract_text_errors() {
        assert!(matches!(
            extract_text(json!({ "choices": [] })),
            Err(CompletionError::InvalidResponse(msg)) if msg == "no choices"
        ));
        assert!(matches!(
            extract_text(json!({
                "choices": [{ "message": { "content": null }, "finish_reason": "content_filter" }]
            })),
            Err(CompletionError::InvalidResponse(msg)) if msg.contains("content_filter")
        ));
        assert!(matches!(
            extract_text(json!({ "error": "nope" })),
            Err(CompletionError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_identity() {
        let client = client();
        assert_eq!(client.provider(), ProviderKind::OpenAi);
        assert_eq!(client.model(), "gpt-4o-mini");
    }
}
