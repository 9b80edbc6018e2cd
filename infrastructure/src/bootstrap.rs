//! Dependency assembly.
//!
//! Builds a [`PredictSubQueriesUseCase`] with one remote engine per hosted
//! provider, all sharing a single `reqwest::Client`.

use crate::config::{ConfigError, FileConfig};
use crate::providers::{anthropic::AnthropicClient, openai::OpenAiClient};
use fanout_application::{PredictSubQueriesUseCase, RemoteModelEngine};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Assemble the prediction use case from validated configuration.
pub fn build_use_case(config: &FileConfig) -> Result<PredictSubQueriesUseCase, ConfigError> {
    let errors = config.errors();
    if !errors.is_empty() {
        return Err(ConfigError::Invalid(errors));
    }

    let params = config.pipeline.to_params();
    let http = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(params.request_timeout)
        .build()?;

    let remote = params.remote_params();
    let openai = OpenAiClient::new(http.clone(), config.providers.openai.clone());
    let anthropic = AnthropicClient::new(http, config.providers.anthropic.clone());

    info!(
        "Prediction pipeline ready (openai: {}, anthropic: {}, timeout: {}s)",
        config.providers.openai.model,
        config.providers.anthropic.model,
        params.request_timeout.as_secs()
    );

    Ok(PredictSubQueriesUseCase::new(&params)
        .with_engine(Arc::new(RemoteModelEngine::new(
            Arc::new(openai),
            remote.clone(),
        )))
        .with_engine(Arc::new(RemoteModelEngine::new(Arc::new(anthropic), remote))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use fanout_domain::{FallbackReason, Language, ProviderConfig, ProviderKind};

    #[test]
    fn test_build_registers_hosted_providers() {
        let use_case = build_use_case(&FileConfig::default()).unwrap();
        assert!(use_case.has_engine(ProviderKind::Template));
        assert!(use_case.has_engine(ProviderKind::OpenAi));
        assert!(use_case.has_engine(ProviderKind::Anthropic));
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let mut config = FileConfig::default();
        config.pipeline.max_results = 0;
        assert!(matches!(
            build_use_case(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_provider_falls_back() {
        let config = ConfigLoader::load_str(
            r#"
[pipeline]
request_timeout_secs = 5
retry_on_rate_limit = false

[providers.openai]
base_url = "http://127.0.0.1:9"
"#,
        )
        .unwrap();
        let use_case = build_use_case(&config).unwrap();
        let session = ProviderConfig::new(ProviderKind::OpenAi, Language::English)
            .with_api_key("sk-test-unreachable");

        let result = use_case
            .analyze("best smartphones 2024", None, &session)
            .await
            .unwrap();

        assert!(result.is_fallback());
        assert!(matches!(
            result.fallback_reason(),
            Some(FallbackReason::Network) | Some(FallbackReason::Timeout)
        ));
        assert_eq!(result.served_by(), ProviderKind::Template);
        assert!(!result.predictions().is_empty());
    }
}
