//! Template generator adapter

use crate::ports::sub_query_generator::{RemoteError, SubQueryGenerator};
use async_trait::async_trait;
use fanout_domain::{
    ApiKey, ProviderKind, Query, QueryAnalysis, SubQueryPrediction, TemplateEngine,
};

/// Exposes the domain [`TemplateEngine`] through the generator port.
///
/// [`predict`](Self::predict) is the infallible entry point the use case
/// relies on for fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator {
    engine: TemplateEngine,
}

impl TemplateGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predict(&self, query: &Query, analysis: &QueryAnalysis) -> Vec<SubQueryPrediction> {
        self.engine.generate_with_analysis(query, analysis)
    }
}

#[async_trait]
impl SubQueryGenerator for TemplateGenerator {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Template
    }

    async fn generate(
        &self,
        query: &Query,
        analysis: &QueryAnalysis,
        _api_key: Option<&ApiKey>,
    ) -> Result<Vec<SubQueryPrediction>, RemoteError> {
        Ok(self.predict(query, analysis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanout_domain::{Language, QueryAnalyzer, QueryNormalizer};

    #[tokio::test]
    async fn test_generate_matches_predict() {
        let query = QueryNormalizer::default()
            .normalize("best smartphones 2024", Some(Language::English))
            .unwrap();
        let analysis = QueryAnalyzer.analyze(&query);
        let generator = TemplateGenerator::new();

        let via_port = generator.generate(&query, &analysis, None).await.unwrap();
        assert_eq!(via_port, generator.predict(&query, &analysis));
        assert!(!via_port.is_empty());
        assert_eq!(generator.kind(), ProviderKind::Template);
        assert_eq!(generator.model(), None);
    }
}
