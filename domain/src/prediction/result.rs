//! Prediction result value objects

use crate::analysis::QueryAnalysis;
use crate::prediction::entities::{ConfidenceBand, SubQueryPrediction};
use crate::provider::{ProviderKind, ProviderSnapshot};
use crate::query::entities::Query;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why a remote request was replaced by template predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Key rejected or missing
    Auth,
    RateLimited,
    Network,
    Timeout,
    /// Response did not match the prediction schema
    Schema,
    /// Provider answered with an unexpected status
    Upstream,
    /// No remote engine is registered for the selected provider
    Unavailable,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::Auth => "auth",
            FallbackReason::RateLimited => "rate_limited",
            FallbackReason::Network => "network",
            FallbackReason::Timeout => "timeout",
            FallbackReason::Schema => "schema",
            FallbackReason::Upstream => "upstream",
            FallbackReason::Unavailable => "unavailable",
        }
    }

    /// User-facing diagnostic
    pub fn describe(&self) -> &'static str {
        match self {
            FallbackReason::Auth => "The API key was rejected. Check the configured key.",
            FallbackReason::RateLimited => "The provider is rate limiting requests. Try again shortly.",
            FallbackReason::Network => "The provider could not be reached.",
            FallbackReason::Timeout => "The provider did not answer in time.",
            FallbackReason::Schema => "The model returned predictions in an unexpected format.",
            FallbackReason::Upstream => "The provider returned an error.",
            FallbackReason::Unavailable => "The selected provider is not available.",
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The outcome of one analysis request (immutable once built)
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    query: Query,
    provider: ProviderSnapshot,
    /// Engine that actually produced the predictions
    served_by: ProviderKind,
    predictions: Vec<SubQueryPrediction>,
    generated_at: DateTime<Utc>,
    is_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback_reason: Option<FallbackReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<QueryAnalysis>,
}

impl PredictionResult {
    /// Result served by the engine the configuration asked for
    pub fn new(
        query: Query,
        provider: ProviderSnapshot,
        served_by: ProviderKind,
        predictions: Vec<SubQueryPrediction>,
    ) -> Self {
        Self {
            query,
            provider,
            served_by,
            predictions,
            generated_at: Utc::now(),
            is_fallback: false,
            fallback_reason: None,
            analysis: None,
        }
    }

    /// Result produced by the template engine after a remote failure
    pub fn fallback(
        query: Query,
        provider: ProviderSnapshot,
        predictions: Vec<SubQueryPrediction>,
        reason: FallbackReason,
    ) -> Self {
        Self {
            is_fallback: true,
            fallback_reason: Some(reason),
            ..Self::new(query, provider, ProviderKind::Template, predictions)
        }
    }

    pub fn with_analysis(mut self, analysis: QueryAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn provider(&self) -> &ProviderSnapshot {
        &self.provider
    }

    pub fn served_by(&self) -> ProviderKind {
        self.served_by
    }

    /// Ranked predictions, best first
    pub fn predictions(&self) -> &[SubQueryPrediction] {
        &self.predictions
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        self.fallback_reason
    }

    pub fn analysis(&self) -> Option<&QueryAnalysis> {
        self.analysis.as_ref()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::of(&self.predictions)
    }
}

/// Aggregate figures shown next to a result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub count: usize,
    pub average_probability: f64,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ResultSummary {
    pub fn of(predictions: &[SubQueryPrediction]) -> Self {
        let count = predictions.len();
        let average_probability = if count == 0 {
            0.0
        } else {
            predictions
                .iter()
                .map(|p| p.probability.value())
                .sum::<f64>()
                / count as f64
        };
        let band_count =
            |band: ConfidenceBand| predictions.iter().filter(|p| p.band() == band).count();

        Self {
            count,
            average_probability,
            high: band_count(ConfidenceBand::High),
            medium: band_count(ConfidenceBand::Medium),
            low: band_count(ConfidenceBand::Low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;
    use crate::core::probability::Probability;
    use crate::provider::ProviderConfig;
    use crate::query::normalizer::QueryNormalizer;

    fn pred(text: &str, score: f64) -> SubQueryPrediction {
        SubQueryPrediction::new(text, Probability::try_new(score).unwrap())
    }

    fn query() -> Query {
        QueryNormalizer::default()
            .normalize("rust books", Some(Language::English))
            .unwrap()
    }

    #[test]
    fn test_summary() {
        let summary = ResultSummary::of(&[pred("a", 0.9), pred("b", 0.7), pred("c", 0.2)]);
        assert_eq!(summary.count, 3);
        assert!((summary.average_probability - 0.6).abs() < 1e-9);
        assert_eq!((summary.high, summary.medium, summary.low), (1, 1, 1));
    }

    #[test]
    fn test_summary_empty() {
        let summary = ResultSummary::of(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_probability, 0.0);
    }

    #[test]
    fn test_fallback_result() {
        let config = ProviderConfig::new(ProviderKind::OpenAi, Language::English);
        let result = PredictionResult::fallback(
            query(),
            config.snapshot(None),
            vec![pred("rust books reviews", 0.87)],
            FallbackReason::Auth,
        );
        assert!(result.is_fallback());
        assert_eq!(result.served_by(), ProviderKind::Template);
        assert_eq!(result.provider().provider, ProviderKind::OpenAi);
        assert_eq!(result.fallback_reason(), Some(FallbackReason::Auth));
    }

    #[test]
    fn test_serializes_without_secret() {
        let config = ProviderConfig::new(ProviderKind::OpenAi, Language::English)
            .with_api_key("sk-very-secret");
        let result = PredictionResult::new(
            query(),
            config.snapshot(Some("gpt-4o".to_string())),
            ProviderKind::OpenAi,
            vec![pred("rust books for beginners", 0.8)],
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("sk-very-secret"));
        assert!(json.contains("\"is_fallback\":false"));
        assert!(json.contains("gpt-4o"));
    }
}
