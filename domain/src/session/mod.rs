//! Session configuration store.
//!
//! Holds the active provider, language and API key for one interactive
//! session. Nothing here is persisted; dropping the store drops the key.

use crate::core::language::Language;
use crate::provider::{ApiKey, ProviderConfig, ProviderKind};

/// Per-session provider configuration, mutated only by explicit user action.
#[derive(Debug, Default)]
pub struct SessionConfigStore {
    config: ProviderConfig,
}

impl SessionConfigStore {
    pub fn new(language: Language) -> Self {
        Self {
            config: ProviderConfig::new(ProviderKind::Template, language),
        }
    }

    pub fn current(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn set_provider(&mut self, provider: ProviderKind) {
        self.config.provider = provider;
    }

    pub fn set_language(&mut self, language: Language) {
        self.config.language = language;
    }

    /// Store a key for the session. Blank input clears the key.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.config.api_key = ApiKey::new(key);
    }

    pub fn clear_api_key(&mut self) {
        self.config.api_key = None;
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_uses_template() {
        let store = SessionConfigStore::new(Language::French);
        assert_eq!(store.current().provider, ProviderKind::Template);
        assert_eq!(store.current().language, Language::French);
        assert!(!store.has_api_key());
    }

    #[test]
    fn test_user_actions_mutate_config() {
        let mut store = SessionConfigStore::default();
        store.set_provider(ProviderKind::Anthropic);
        store.set_language(Language::German);
        store.set_api_key("sk-ant-123");

        let config = store.current();
        assert_eq!(config.provider, ProviderKind::Anthropic);
        assert_eq!(config.language, Language::German);
        assert!(config.wants_remote());

        store.clear_api_key();
        assert!(!store.has_api_key());
    }

    #[test]
    fn test_blank_key_clears() {
        let mut store = SessionConfigStore::default();
        store.set_api_key("sk-1");
        store.set_api_key("  ");
        assert!(!store.has_api_key());
    }
}
