//! Pipeline configuration from TOML (`[pipeline]` section)

use crate::config::validation::ConfigIssue;
use fanout_application::PipelineParams;
use fanout_domain::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw pipeline configuration from TOML
///
/// # Example
///
/// ```toml
/// [pipeline]
/// max_results = 10
/// min_probability = 0.0
/// default_language = "en"          # en, es, fr, de, it
/// request_timeout_secs = 20
/// retry_on_rate_limit = true
/// retry_backoff_ms = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    pub max_results: usize,
    pub min_probability: f64,
    /// Predictions requested from a remote model
    pub requested_predictions: usize,
    pub max_remote_predictions: usize,
    pub max_query_chars: usize,
    pub min_detection_confidence: f64,
    pub default_language: String,
    pub request_timeout_secs: u64,
    pub retry_on_rate_limit: bool,
    pub retry_backoff_ms: u64,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        let params = PipelineParams::default();
        Self {
            max_results: params.max_results,
            min_probability: params.min_probability,
            requested_predictions: params.requested_predictions,
            max_remote_predictions: params.max_remote_predictions,
            max_query_chars: params.max_query_chars,
            min_detection_confidence: params.min_detection_confidence,
            default_language: params.default_language.code().to_string(),
            request_timeout_secs: params.request_timeout.as_secs(),
            retry_on_rate_limit: params.retry_on_rate_limit,
            retry_backoff_ms: params.retry_backoff.as_millis() as u64,
        }
    }
}

impl FilePipelineConfig {
    /// Parse default_language, returning a warning on failure.
    pub fn parse_default_language(&self) -> (Language, Vec<ConfigIssue>) {
        match self.default_language.parse::<Language>() {
            Ok(language) => (language, vec![]),
            Err(_) => {
                let valid = Language::ALL
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", ");
                let issue = ConfigIssue::warning(
                    "pipeline.default_language",
                    format!(
                        "unknown value '{}' (expected one of {}), falling back to 'en'",
                        self.default_language, valid
                    ),
                );
                (Language::default(), vec![issue])
            }
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.max_results == 0 {
            issues.push(ConfigIssue::error("pipeline.max_results", "must be at least 1"));
        }
        if self.max_remote_predictions == 0 {
            issues.push(ConfigIssue::error(
                "pipeline.max_remote_predictions",
                "must be at least 1",
            ));
        }
        if self.requested_predictions == 0 {
            issues.push(ConfigIssue::error(
                "pipeline.requested_predictions",
                "must be at least 1",
            ));
        } else if self.requested_predictions > self.max_remote_predictions {
            issues.push(ConfigIssue::warning(
                "pipeline.requested_predictions",
                format!(
                    "{} exceeds max_remote_predictions ({}); complete replies will be rejected",
                    self.requested_predictions, self.max_remote_predictions
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_probability) {
            issues.push(ConfigIssue::error(
                "pipeline.min_probability",
                "must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.min_detection_confidence) {
            issues.push(ConfigIssue::error(
                "pipeline.min_detection_confidence",
                "must be between 0 and 1",
            ));
        }
        if self.max_query_chars == 0 {
            issues.push(ConfigIssue::error(
                "pipeline.max_query_chars",
                "must be at least 1",
            ));
        }
        if self.request_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "pipeline.request_timeout_secs",
                "cannot be 0",
            ));
        }

        issues.extend(self.parse_default_language().1);
        issues
    }

    /// Convert to application parameters. Unknown languages use the default.
    pub fn to_params(&self) -> PipelineParams {
        let (language, _) = self.parse_default_language();
        PipelineParams {
            max_results: self.max_results,
            min_probability: self.min_probability,
            requested_predictions: self.requested_predictions,
            max_remote_predictions: self.max_remote_predictions,
            max_query_chars: self.max_query_chars,
            min_detection_confidence: self.min_detection_confidence,
            default_language: language,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            retry_on_rate_limit: self.retry_on_rate_limit,
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}
