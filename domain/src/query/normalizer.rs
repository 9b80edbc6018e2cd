//! Query normalization: raw user text → [`Query`].

use super::detection::{KeywordLanguageDetector, LanguageDetector};
use super::entities::{LanguageSource, Query};
use crate::core::error::ValidationError;
use crate::core::language::Language;
use std::sync::Arc;

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn canonicalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Key used to compare predictions for equality (case/whitespace-insensitive).
pub fn dedup_key(text: &str) -> String {
    canonicalize(text).to_lowercase()
}

/// Bounds and defaults applied during normalization
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizerSettings {
    /// Maximum canonical length, counted in characters
    pub max_chars: usize,
    /// Detection results below this confidence fall back to `default_language`
    pub min_detection_confidence: f64,
    pub default_language: Language,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            max_chars: 256,
            min_detection_confidence: 0.6,
            default_language: Language::English,
        }
    }
}

/// Turns raw input into a validated [`Query`]. Pure: no I/O, no state.
#[derive(Clone)]
pub struct QueryNormalizer {
    settings: NormalizerSettings,
    detector: Arc<dyn LanguageDetector>,
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new(NormalizerSettings::default())
    }
}

impl std::fmt::Debug for QueryNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryNormalizer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl QueryNormalizer {
    pub fn new(settings: NormalizerSettings) -> Self {
        Self {
            settings,
            detector: Arc::new(KeywordLanguageDetector),
        }
    }

    /// Replace the language detector.
    pub fn with_detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.detector = detector;
        self
    }

    pub fn settings(&self) -> &NormalizerSettings {
        &self.settings
    }

    /// Normalize `raw_text`.
    ///
    /// When `declared_language` is `None` the detector decides, falling back
    /// to the default language on low confidence.
    pub fn normalize(
        &self,
        raw_text: &str,
        declared_language: Option<Language>,
    ) -> Result<Query, ValidationError> {
        let canonical = canonicalize(raw_text);
        if canonical.is_empty() {
            return Err(ValidationError::Empty);
        }

        let len = canonical.chars().count();
        if len > self.settings.max_chars {
            return Err(ValidationError::TooLong {
                len,
                max: self.settings.max_chars,
            });
        }

        let (language, source) = match declared_language {
            Some(language) => (language, LanguageSource::Declared),
            None => self.detect(&canonical),
        };

        Ok(Query::new(raw_text.to_string(), canonical, language, source))
    }

    fn detect(&self, canonical: &str) -> (Language, LanguageSource) {
        match self.detector.detect(canonical) {
            Some(d) if d.confidence >= self.settings.min_detection_confidence => (
                d.language,
                LanguageSource::Detected {
                    confidence: d.confidence,
                },
            ),
            _ => (self.settings.default_language, LanguageSource::Default),
        }
    }
}
