//! Query value object

use crate::core::language::Language;
use serde::Serialize;

/// How the query language was decided
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LanguageSource {
    /// Supplied by the caller
    Declared,
    /// Chosen by language detection above the confidence threshold
    Detected { confidence: f64 },
    /// Detection was inconclusive; the configured default was used
    Default,
}

/// A normalized main query (Value Object)
///
/// Only [`QueryNormalizer`](super::normalizer::QueryNormalizer) creates
/// queries, so the canonical form is always non-empty, trimmed, free of
/// repeated whitespace and within the configured length bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    raw: String,
    canonical: String,
    language: Language,
    language_source: LanguageSource,
}

impl Query {
    pub(crate) fn new(
        raw: String,
        canonical: String,
        language: Language,
        language_source: LanguageSource,
    ) -> Self {
        Self {
            raw,
            canonical,
            language,
            language_source,
        }
    }

    /// The text exactly as the user entered it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The whitespace-normalized text used for all downstream processing
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn language_source(&self) -> LanguageSource {
        self.language_source
    }

    /// Copy of this query tagged with another language
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            language_source: LanguageSource::Declared,
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical)
    }
}
