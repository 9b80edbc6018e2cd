//! Domain layer for fanout-predictor
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Fan-out
//!
//! A search engine answering a main query is assumed to issue a set of
//! derived *sub-queries*. The pipeline predicts those sub-queries and scores
//! each with an opaque relative probability.
//!
//! ## Template / Remote
//!
//! - **Template**: deterministic rule-based predictions, always available
//! - **Remote**: predictions produced by a hosted language model, validated
//!   against a fixed schema before use

pub mod analysis;
pub mod core;
pub mod prediction;
pub mod prompt;
pub mod provider;
pub mod query;
pub mod session;
pub mod template;
pub mod util;

// Re-export commonly used types
pub use analysis::{Category, Complexity, Intent, QueryAnalysis, QueryAnalyzer};
pub use core::{
    error::{SchemaError, ValidationError},
    language::Language,
    probability::Probability,
};
pub use prediction::{
    entities::{ConfidenceBand, SubQueryPrediction},
    parsing::parse_prediction_response,
    ranking::{Ranker, RankingPolicy},
    result::{FallbackReason, PredictionResult, ResultSummary},
};
pub use prompt::PredictionPromptTemplate;
pub use provider::{ApiKey, ProviderConfig, ProviderKind, ProviderSnapshot};
pub use query::{
    detection::{KeywordLanguageDetector, LanguageDetection, LanguageDetector},
    entities::{LanguageSource, Query},
    normalizer::{NormalizerSettings, QueryNormalizer, canonicalize, dedup_key},
};
pub use session::SessionConfigStore;
pub use template::TemplateEngine;
