//! Sub-query prediction entity

use crate::core::probability::Probability;
use crate::query::normalizer::dedup_key;
use serde::{Deserialize, Serialize};

/// Display band for a prediction score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    /// score >= 0.8
    High,
    /// score >= 0.6
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn of(probability: Probability) -> Self {
        let p = probability.value();
        if p >= 0.8 {
            ConfidenceBand::High
        } else if p >= 0.6 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

/// One predicted sub-query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQueryPrediction {
    /// Predicted query text
    #[serde(rename = "sub_query")]
    pub text: String,
    pub probability: Probability,
    /// Why the query is expected to be generated
    #[serde(rename = "reasoning", default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Facet label (e.g. "Reviews", "Comparison")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    /// Intent label (e.g. "commercial_investigation")
    #[serde(rename = "intent_type", default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

impl SubQueryPrediction {
    pub fn new(text: impl Into<String>, probability: Probability) -> Self {
        Self {
            text: text.into(),
            probability,
            rationale: None,
            facet: None,
            intent: None,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        self.facet = Some(facet.into());
        self
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// Case/whitespace-insensitive identity used for deduplication
    pub fn key(&self) -> String {
        dedup_key(&self.text)
    }

    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::of(self.probability)
    }
}
