//! Provider configuration from TOML (`[providers]` section)

use crate::config::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Base URL for the OpenAI API (can be overridden for compatible gateways).
    pub base_url: String,
    pub model: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    pub temperature: f64,
    /// Send `response_format: json_object`. Turn off for models without JSON mode.
    pub json_mode: bool,
    /// Rejected by validation; keys are supplied per session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
            json_mode: true,
            api_key: None,
        }
    }
}

/// Anthropic API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Base URL for the Anthropic API.
    pub base_url: String,
    pub model: String,
    /// Max tokens per response.
    pub max_tokens: u32,
    pub temperature: f64,
    /// Anthropic API version header.
    pub api_version: String,
    /// Rejected by validation; keys are supplied per session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-3-sonnet-20240229".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
            api_version: "2023-06-01".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
}

impl FileProvidersConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let openai = &self.openai;
        let anthropic = &self.anthropic;

        check_endpoint(
            &mut issues,
            "providers.openai",
            &openai.base_url,
            &openai.model,
            openai.max_tokens,
            openai.temperature,
            openai.api_key.is_some(),
        );
        check_endpoint(
            &mut issues,
            "providers.anthropic",
            &anthropic.base_url,
            &anthropic.model,
            anthropic.max_tokens,
            anthropic.temperature,
            anthropic.api_key.is_some(),
        );
        if anthropic.api_version.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "providers.anthropic.api_version",
                "cannot be empty",
            ));
        }

        issues
    }
}

fn check_endpoint(
    issues: &mut Vec<ConfigIssue>,
    section: &str,
    base_url: &str,
    model: &str,
    max_tokens: u32,
    temperature: f64,
    has_api_key: bool,
) {
    if has_api_key {
        issues.push(ConfigIssue::error(
            format!("{section}.api_key"),
            "API keys are not read from configuration; set them on the session",
        ));
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        issues.push(ConfigIssue::error(
            format!("{section}.base_url"),
            format!("'{base_url}' is not an http(s) URL"),
        ));
    }
    if model.trim().is_empty() {
        issues.push(ConfigIssue::error(
            format!("{section}.model"),
            "model name cannot be empty",
        ));
    }
    if max_tokens == 0 {
        issues.push(ConfigIssue::error(
            format!("{section}.max_tokens"),
            "must be at least 1",
        ));
    }
    if !(0.0..=2.0).contains(&temperature) {
        issues.push(ConfigIssue::warning(
            format!("{section}.temperature"),
            format!("{temperature} is outside 0.0..=2.0"),
        ));
    }
}
