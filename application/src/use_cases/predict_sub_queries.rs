//! Predict Sub-Queries use case.
//!
//! Routes a normalized query to the template engine or to the remote engine
//! registered for the session's provider, ranks the output, and falls back
//! to templates whenever the remote path fails. Only input validation errors
//! reach the caller.

use crate::config::PipelineParams;
use crate::engines::template::TemplateGenerator;
use crate::ports::sub_query_generator::SubQueryGenerator;
use fanout_domain::util::truncate_str;
use fanout_domain::{
    FallbackReason, Language, LanguageDetector, PredictionResult, ProviderConfig, ProviderKind,
    Query, QueryAnalysis, QueryAnalyzer, QueryNormalizer, Ranker, SubQueryPrediction,
    ValidationError,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Where a request is served from
enum Route<'a> {
    /// Template engine by choice (template provider or no key)
    Template,
    /// Remote engine registered for the provider
    Remote(&'a Arc<dyn SubQueryGenerator>),
    /// Remote provider selected but no engine registered
    Unavailable,
}

/// Use case for predicting fan-out sub-queries.
///
/// The template generator is always owned here, so every request ends with
/// a result. Remote engines are registered per provider with
/// [`with_engine`](Self::with_engine).
#[derive(Clone)]
pub struct PredictSubQueriesUseCase {
    normalizer: QueryNormalizer,
    analyzer: QueryAnalyzer,
    template: TemplateGenerator,
    engines: HashMap<ProviderKind, Arc<dyn SubQueryGenerator>>,
    ranker: Ranker,
}

impl PredictSubQueriesUseCase {
    pub fn new(params: &PipelineParams) -> Self {
        Self {
            normalizer: QueryNormalizer::new(params.normalizer_settings()),
            analyzer: QueryAnalyzer,
            template: TemplateGenerator::new(),
            engines: HashMap::new(),
            ranker: Ranker::new(params.ranking_policy()),
        }
    }

    /// Register a remote engine under its provider kind.
    ///
    /// Template-kind engines are ignored; the built-in template generator
    /// always serves that route.
    pub fn with_engine(mut self, engine: Arc<dyn SubQueryGenerator>) -> Self {
        let kind = engine.kind();
        if kind.is_remote() {
            self.engines.insert(kind, engine);
        }
        self
    }

    pub fn with_detector(mut self, detector: Arc<dyn LanguageDetector>) -> Self {
        self.normalizer = self.normalizer.with_detector(detector);
        self
    }

    pub fn has_engine(&self, provider: ProviderKind) -> bool {
        provider == ProviderKind::Template || self.engines.contains_key(&provider)
    }

    pub fn normalizer(&self) -> &QueryNormalizer {
        &self.normalizer
    }

    /// Normalize raw input, then [`predict`](Self::predict).
    ///
    /// The query takes `declared_language` when given, otherwise the session
    /// language from `config`.
    pub async fn analyze(
        &self,
        raw_text: &str,
        declared_language: Option<Language>,
        config: &ProviderConfig,
    ) -> Result<PredictionResult, ValidationError> {
        let language = declared_language.unwrap_or(config.language);
        let query = self.normalizer.normalize(raw_text, Some(language))?;
        if language == config.language {
            return Ok(self.predict(&query, config).await);
        }

        let mut request_config = config.clone();
        request_config.language = language;
        Ok(self.predict(&query, &request_config).await)
    }

    /// Produce ranked predictions for `query`. Never fails.
    ///
    /// Generation uses the language of `config`; a query tagged with another
    /// language is re-tagged first.
    pub async fn predict(&self, query: &Query, config: &ProviderConfig) -> PredictionResult {
        if query.language() != config.language {
            debug!(
                "Re-tagging query from {} to session language {}",
                query.language(),
                config.language
            );
            let query = query.with_language(config.language);
            return self.serve(&query, config).await;
        }
        self.serve(query, config).await
    }

    async fn serve(&self, query: &Query, config: &ProviderConfig) -> PredictionResult {
        let started = Instant::now();
        let analysis = self.analyzer.analyze(query);

        let result = match self.route(config) {
            Route::Template => {
                debug!(
                    "Routing '{}' to template engine (provider: {}, key: {})",
                    truncate_str(query.canonical(), 60),
                    config.provider,
                    config.api_key.is_some()
                );
                let predictions = self.rank(query, self.template.predict(query, &analysis));
                PredictionResult::new(
                    query.clone(),
                    config.snapshot(None),
                    ProviderKind::Template,
                    predictions,
                )
            }
            Route::Unavailable => {
                warn!(
                    "No remote engine registered for {}, using templates",
                    config.provider
                );
                self.fallback(query, config, &analysis, FallbackReason::Unavailable)
            }
            Route::Remote(engine) => {
                debug!(
                    "Routing '{}' to {} remote engine",
                    truncate_str(query.canonical(), 60),
                    config.provider
                );
                match engine
                    .generate(query, &analysis, config.api_key.as_ref())
                    .await
                {
                    Ok(predictions) => {
                        let ranked = self.rank(query, predictions);
                        if ranked.is_empty() {
                            warn!(
                                "{} returned no usable predictions, using templates",
                                config.provider
                            );
                            self.fallback(query, config, &analysis, FallbackReason::Schema)
                        } else {
                            PredictionResult::new(
                                query.clone(),
                                config.snapshot(engine.model().map(str::to_string)),
                                config.provider,
                                ranked,
                            )
                        }
                    }
                    Err(e) => {
                        let reason = e.fallback_reason();
                        warn!(
                            "{} request failed ({}): {}; using templates",
                            config.provider, reason, e
                        );
                        self.fallback(query, config, &analysis, reason)
                    }
                }
            }
        };

        info!(
            "Served {} predictions via {} (provider: {}, language: {}, fallback: {}) in {}ms",
            result.predictions().len(),
            result.served_by(),
            config.provider,
            query.language(),
            result.is_fallback(),
            started.elapsed().as_millis()
        );

        result.with_analysis(analysis)
    }

    fn route(&self, config: &ProviderConfig) -> Route<'_> {
        if !config.wants_remote() {
            return Route::Template;
        }
        match self.engines.get(&config.provider) {
            Some(engine) => Route::Remote(engine),
            None => Route::Unavailable,
        }
    }

    fn rank(&self, query: &Query, predictions: Vec<SubQueryPrediction>) -> Vec<SubQueryPrediction> {
        self.ranker.rank_excluding(query.canonical(), predictions)
    }

    fn fallback(
        &self,
        query: &Query,
        config: &ProviderConfig,
        analysis: &QueryAnalysis,
        reason: FallbackReason,
    ) -> PredictionResult {
        let predictions = self.rank(query, self.template.predict(query, analysis));
        PredictionResult::fallback(query.clone(), config.snapshot(None), predictions, reason)
    }
}
