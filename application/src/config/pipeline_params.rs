//! Pipeline parameters: request limits and remote-call policy.
//!
//! [`PipelineParams`] groups the static parameters that control one
//! prediction request in [`PredictSubQueriesUseCase`](crate::use_cases::predict_sub_queries::PredictSubQueriesUseCase).
//! Session choices (provider, key, language) are not here; they arrive with
//! each request.

use crate::engines::remote::RemoteParams;
use fanout_domain::{Language, NormalizerSettings, RankingPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prediction pipeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Maximum number of ranked predictions returned.
    pub max_results: usize,
    /// Ranked predictions below this score are dropped.
    pub min_probability: f64,
    /// Number of predictions requested from a remote model.
    pub requested_predictions: usize,
    /// Remote responses with more predictions than this are rejected.
    pub max_remote_predictions: usize,
    /// Maximum canonical query length in characters.
    pub max_query_chars: usize,
    /// Language detection below this confidence uses `default_language`.
    pub min_detection_confidence: f64,
    pub default_language: Language,
    /// Upper bound on a single remote call.
    pub request_timeout: Duration,
    /// Retry once after a rate-limit response.
    pub retry_on_rate_limit: bool,
    /// Wait before the rate-limit retry when the provider gives no hint.
    pub retry_backoff: Duration,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            max_results: 10,
            min_probability: 0.0,
            requested_predictions: 8,
            max_remote_predictions: 20,
            max_query_chars: 256,
            min_detection_confidence: 0.6,
            default_language: Language::English,
            request_timeout: Duration::from_secs(20),
            retry_on_rate_limit: true,
            retry_backoff: Duration::from_secs(1),
        }
    }
}

impl PipelineParams {
    // ==================== Builder Methods ====================

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_min_probability(mut self, min: f64) -> Self {
        self.min_probability = min;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_retry_on_rate_limit(mut self, enabled: bool) -> Self {
        self.retry_on_rate_limit = enabled;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    // ==================== Derived Settings ====================

    pub fn normalizer_settings(&self) -> NormalizerSettings {
        NormalizerSettings {
            max_chars: self.max_query_chars,
            min_detection_confidence: self.min_detection_confidence,
            default_language: self.default_language,
        }
    }

    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy {
            max_results: self.max_results,
            min_probability: self.min_probability,
        }
    }

    pub fn remote_params(&self) -> RemoteParams {
        RemoteParams {
            requested_predictions: self.requested_predictions,
            max_predictions: self.max_remote_predictions,
            timeout: self.request_timeout,
            retry_on_rate_limit: self.retry_on_rate_limit,
            retry_backoff: self.retry_backoff,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PipelineParams::default();
        assert_eq!(params.max_results, 10);
        assert_eq!(params.max_remote_predictions, 20);
        assert_eq!(params.max_query_chars, 256);
        assert_eq!(params.min_detection_confidence, 0.6);
        assert_eq!(params.request_timeout, Duration::from_secs(20));
        assert!(params.retry_on_rate_limit);
    }

    #[test]
    fn test_builder_flows_into_derived_settings() {
        let params = PipelineParams::default()
            .with_max_results(5)
            .with_min_probability(0.3)
            .with_request_timeout(Duration::from_secs(3))
            .with_retry_on_rate_limit(false)
            .with_default_language(Language::German);

        assert_eq!(params.ranking_policy().max_results, 5);
        assert_eq!(params.ranking_policy().min_probability, 0.3);
        assert_eq!(params.remote_params().timeout, Duration::from_secs(3));
        assert!(!params.remote_params().retry_on_rate_limit);
        assert_eq!(
            params.normalizer_settings().default_language,
            Language::German
        );
    }
}
