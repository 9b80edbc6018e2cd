//! Provider selection and credentials.
//!
//! These types are provider-neutral. Wire formats for the hosted services
//! live in the infrastructure layer.

use crate::core::language::Language;
use serde::{Deserialize, Serialize};

/// Where predictions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Built-in deterministic template engine
    #[default]
    Template,
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Template => "template",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    /// Whether this provider calls a hosted model
    pub fn is_remote(&self) -> bool {
        !matches!(self, ProviderKind::Template)
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "template" => Ok(ProviderKind::Template),
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" => Ok(ProviderKind::Anthropic),
            other => Err(format!(
                "unknown provider '{}' (expected one of: template, openai, anthropic)",
                other
            )),
        }
    }
}

/// An API key held for the duration of a session.
///
/// Formatting never reveals the key and the type is not serializable, so it
/// cannot end up in logs, exports or config files. Use [`ApiKey::expose`] at
/// the single point where a request header is built.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank input.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Session-scoped provider configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub provider: ProviderKind,
    pub api_key: Option<ApiKey>,
    pub language: Language,
}

impl ProviderConfig {
    pub fn new(provider: ProviderKind, language: Language) -> Self {
        Self {
            provider,
            api_key: None,
            language,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    /// Whether a request with this configuration goes to a hosted model
    pub fn wants_remote(&self) -> bool {
        self.provider.is_remote() && self.api_key.is_some()
    }

    /// Non-secret view of this configuration
    pub fn snapshot(&self, model: Option<String>) -> ProviderSnapshot {
        ProviderSnapshot {
            provider: self.provider,
            language: self.language,
            model,
        }
    }
}

/// The non-secret part of a [`ProviderConfig`], as recorded on results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSnapshot {
    /// Provider the user selected
    pub provider: ProviderKind,
    pub language: Language,
    /// Model that produced the predictions, if a hosted model did
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parse_and_display() {
        assert_eq!("OpenAI".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!(ProviderKind::Anthropic.to_string(), "anthropic");
        assert!("gemini".parse::<ProviderKind>().is_err());
        assert!(!ProviderKind::Template.is_remote());
    }

    #[test]
    fn test_provider_kind_serde() {
        assert_eq!(
            serde_json::to_string(&ProviderKind::OpenAi).unwrap(),
            "\"openai\""
        );
        let kind: ProviderKind = serde_json::from_str("\"anthropic\"").unwrap();
        assert_eq!(kind, ProviderKind::Anthropic);
    }

    #[test]
    fn test_api_key_is_redacted() {
        let key = ApiKey::new("sk-secret-1234").unwrap();
        assert_eq!(format!("{:?}", key), "ApiKey(<redacted>)");
        assert_eq!(key.to_string(), "<redacted>");
        assert_eq!(key.expose(), "sk-secret-1234");

        let config = ProviderConfig::new(ProviderKind::OpenAi, Language::English)
            .with_api_key("sk-secret-1234");
        assert!(!format!("{:?}", config).contains("sk-secret"));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        assert!(ApiKey::new("   ").is_none());
        let config =
            ProviderConfig::new(ProviderKind::Anthropic, Language::English).with_api_key("");
        assert!(!config.wants_remote());
    }

    #[test]
    fn test_wants_remote() {
        let template = ProviderConfig::new(ProviderKind::Template, Language::English)
            .with_api_key("sk-123");
        assert!(!template.wants_remote());

        let openai =
            ProviderConfig::new(ProviderKind::OpenAi, Language::English).with_api_key("sk-123");
        assert!(openai.wants_remote());
    }
}
