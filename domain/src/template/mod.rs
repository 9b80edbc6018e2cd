//! Template prediction engine.
//!
//! Deterministic, offline sub-query generation. Each language has a fixed
//! table of modifier templates with a prior weight per template. The query
//! analysis then selects further families:
//!
//! - intent: one table per search intent
//! - context: one table per topical category, tips otherwise
//! - entity: specifications and problems for up to three brand or product
//!   entities
//! - competitive: market templates when commercial intent exceeds
//!   [`COMPETITIVE_THRESHOLD`]
//! - temporal: the following year, for queries mentioning a year
//!
//! Identical input always yields identical, identically ordered output.

mod tables;

use crate::analysis::{Intent, QueryAnalysis, QueryAnalyzer};
use crate::core::probability::Probability;
use crate::prediction::entities::SubQueryPrediction;
use crate::query::entities::Query;
use crate::query::normalizer::{canonicalize, dedup_key};
use crate::util::contains_ci;
use tables::{
    Template, base_templates, competitive_templates, context_templates, entity_templates,
    intent_templates,
};

/// Prior weight of the "next year" follow-up
const TEMPORAL_WEIGHT: f64 = 0.52;

/// Commercial intent above which the competitive family is added
pub const COMPETITIVE_THRESHOLD: f64 = 0.5;

const MAX_ENTITIES: usize = 3;

/// Rule-based generator used without an API key and as the fallback engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine {
    analyzer: QueryAnalyzer,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&self, query: &Query) -> Vec<SubQueryPrediction> {
        let analysis = self.analyzer.analyze(query);
        self.generate_with_analysis(query, &analysis)
    }

    /// Generate predictions using an analysis computed by the caller.
    pub fn generate_with_analysis(
        &self,
        query: &Query,
        analysis: &QueryAnalysis,
    ) -> Vec<SubQueryPrediction> {
        let text = query.canonical();
        let lower = text.to_lowercase();
        let query_key = dedup_key(text);
        let language = query.language();
        let intent_label = analysis.intent.as_str();
        let usable = |t: &&Template| !contains_ci(&lower, t.modifier);

        let competitive: &[Template] = if analysis.commercial_intent > COMPETITIVE_THRESHOLD {
            competitive_templates(language)
        } else {
            &[]
        };

        let mut predictions: Vec<SubQueryPrediction> = base_templates(language)
            .iter()
            .chain(intent_templates(language, analysis.intent))
            .chain(context_templates(language, analysis.category))
            .filter(usable)
            .map(|t| render(t, "{query}", text, intent_label))
            .collect();

        for entity in analysis.entities.iter().filter(|e| !is_year(e)).take(MAX_ENTITIES) {
            predictions.extend(
                entity_templates(language)
                    .iter()
                    .filter(usable)
                    .map(|t| render(t, "{entity}", entity, Intent::Informational.as_str())),
            );
        }

        predictions.extend(
            competitive
                .iter()
                .filter(usable)
                .map(|t| render(t, "{query}", text, Intent::CommercialInvestigation.as_str())),
        );

        predictions.retain(|p| p.key() != query_key);

        if let Some(year) = analysis.year()
            && let Some(next) = next_year_query(text, year)
            && dedup_key(&next) != query_key
        {
            predictions.push(
                SubQueryPrediction::new(next, Probability::clamped(TEMPORAL_WEIGHT))
                    .with_facet("Temporal")
                    .with_intent(intent_label)
                    .with_rationale(format!("Follow-up for the year after {}", year)),
            );
        }

        predictions
    }
}

fn render(template: &Template, placeholder: &str, value: &str, intent: &str) -> SubQueryPrediction {
    SubQueryPrediction::new(
        template.pattern.replace(placeholder, value),
        Probability::clamped(template.weight),
    )
    .with_facet(template.facet)
    .with_intent(intent)
    .with_rationale(format!("Fixed template prior for {} queries", template.facet))
}

fn is_year(entity: &str) -> bool {
    entity.len() == 4 && entity.chars().all(|c| c.is_ascii_digit())
}

/// Replace the first mention of `year` with the following year.
fn next_year_query(text: &str, year: u32) -> Option<String> {
    let year_str = year.to_string();
    if !text.contains(&year_str) {
        return None;
    }
    let next = text.replacen(&year_str, &(year + 1).to_string(), 1);
    Some(canonicalize(&next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;
    use crate::query::normalizer::QueryNormalizer;

    fn query(text: &str, language: Language) -> Query {
        QueryNormalizer::default()
            .normalize(text, Some(language))
            .unwrap()
    }

    fn find<'a>(predictions: &'a [SubQueryPrediction], text: &str) -> Option<&'a SubQueryPrediction> {
        predictions.iter().find(|p| p.text == text)
    }

    #[test]
    fn test_best_smartphones_scenario() {
        let q = query("best smartphones 2024", Language::English);
        let predictions = TemplateEngine::new().generate(&q);

        let reviews = find(&predictions, "best smartphones 2024 reviews").unwrap();
        assert_eq!(reviews.probability.value(), 0.87);
        let comparison = find(&predictions, "best smartphones 2024 comparison").unwrap();
        assert_eq!(comparison.probability.value(), 0.76);

        assert!(predictions.iter().all(|p| p.key() != "best smartphones 2024"));
    }

    #[test]
    fn test_modifier_already_in_query_is_skipped() {
        let q = query("best smartphones 2024", Language::English);
        let predictions = TemplateEngine::new().generate(&q);
        assert!(find(&predictions, "best best smartphones 2024").is_none());

        let q = query("laptop Reviews", Language::English);
        let predictions = TemplateEngine::new().generate(&q);
        assert!(predictions.iter().all(|p| !p.text.ends_with("Reviews reviews")));
    }

    #[test]
    fn test_deterministic() {
        let engine = TemplateEngine::new();
        let q = query("comprar portátil barato", Language::Spanish);
        assert_eq!(engine.generate(&q), engine.generate(&q));
    }

    #[test]
    fn test_priors_independent_of_query_content() {
        let engine = TemplateEngine::new();
        let a = engine.generate(&query("garden chairs", Language::English));
        let b = engine.generate(&query("mountain bikes", Language::English));
        assert_eq!(
            find(&a, "garden chairs reviews").unwrap().probability,
            find(&b, "mountain bikes reviews").unwrap().probability
        );
    }

    #[test]
    fn test_temporal_follow_up() {
        let q = query("best smartphones 2024", Language::English);
        let predictions = TemplateEngine::new().generate(&q);
        let next = find(&predictions, "best smartphones 2025").unwrap();
        assert_eq!(next.facet.as_deref(), Some("Temporal"));
    }

    #[test]
    fn test_language_specific_tables() {
        let q = query("portátil gaming", Language::Spanish);
        let predictions = TemplateEngine::new().generate(&q);
        assert!(find(&predictions, "portátil gaming reseñas").is_some());

        let q = query("vélo électrique", Language::French);
        let predictions = TemplateEngine::new().generate(&q);
        assert!(find(&predictions, "vélo électrique avis").is_some());

        let q = query("e-bike", Language::German);
        let predictions = TemplateEngine::new().generate(&q);
        assert!(find(&predictions, "e-bike vergleich").is_some());

        let q = query("bici elettrica", Language::Italian);
        let predictions = TemplateEngine::new().generate(&q);
        assert!(find(&predictions, "bici elettrica recensioni").is_some());
    }

    #[test]
    fn test_intent_family_added() {
        let q = query("where to buy running shoes", Language::English);
        let predictions = TemplateEngine::new().generate(&q);
        // "where" makes this informational
        assert!(find(&predictions, "what is where to buy running shoes").is_some());
        assert!(predictions.iter().all(|p| p.intent.as_deref() == Some("informational")));
    }

    #[test]
    fn test_category_context_family() {
        let engine = TemplateEngine::new();

        let tech = engine.generate(&query("gaming laptop", Language::English));
        let setup = find(&tech, "gaming laptop setup").unwrap();
        assert_eq!(setup.facet.as_deref(), Some("Technology Context"));
        assert!(find(&tech, "gaming laptop compatibility").is_some());

        let shop = engine.generate(&query("shop sofa", Language::English));
        assert!(find(&shop, "shop sofa warranty").is_some());
        assert!(find(&shop, "shop sofa return policy").is_some());

        let health = engine.generate(&query("migraine treatment", Language::English));
        assert!(find(&health, "migraine treatment side effects").is_some());

        let general = engine.generate(&query("garden chairs", Language::English));
        assert!(find(&general, "garden chairs tips").is_some());
        assert!(find(&general, "garden chairs setup").is_none());
    }

    #[test]
    fn test_entity_family() {
        let q = query("iphone vs samsung 2024", Language::English);
        let predictions = TemplateEngine::new().generate(&q);

        let specs = find(&predictions, "iphone specifications").unwrap();
        assert_eq!(specs.intent.as_deref(), Some("informational"));
        assert_eq!(specs.probability.value(), 0.6);
        assert!(find(&predictions, "samsung problems").is_some());
        // Years feed the temporal follow-up, not the entity family
        assert!(find(&predictions, "2024 specifications").is_none());
    }

    #[test]
    fn test_entity_family_is_localized() {
        let q = query("samsung barato", Language::Spanish);
        let predictions = TemplateEngine::new().generate(&q);
        assert!(find(&predictions, "samsung especificaciones").is_some());
        assert!(find(&predictions, "samsung problemas").is_some());
    }

    #[test]
    fn test_competitive_family_needs_strong_commercial_intent() {
        let engine = TemplateEngine::new();

        // best + top: 2 of 3 signals
        let strong = engine.generate(&query("best top headphones", Language::English));
        let share = find(&strong, "best top headphones market share").unwrap();
        assert_eq!(share.intent.as_deref(), Some("commercial_investigation"));
        assert_eq!(share.facet.as_deref(), Some("Market Intelligence"));
        assert!(find(&strong, "top competitors best top headphones").is_some());

        // best alone: 1 of 3 signals
        let weak = engine.generate(&query("best headphones", Language::English));
        assert!(find(&weak, "best headphones market share").is_none());
    }

    #[test]
    fn test_all_probabilities_in_range() {
        for language in Language::ALL {
            let q = query("test 2030", language);
            for p in TemplateEngine::new().generate(&q) {
                assert!((0.0..=1.0).contains(&p.probability.value()));
                assert!(!p.text.is_empty());
            }
        }
    }
}
