//! Prompt templates for remote prediction
//!
//! The prompt is provider-agnostic: every provider receives the same system
//! and user text and is asked for the same JSON schema.

use crate::analysis::QueryAnalysis;
use crate::core::language::Language;
use crate::query::entities::Query;

struct LanguageInstructions {
    context: &'static str,
    instruction: &'static str,
    format: &'static str,
}

fn instructions(language: Language) -> LanguageInstructions {
    match language {
        Language::English => LanguageInstructions {
            context: "You are an expert SEO analyzing how search engines fan out queries",
            instruction: "Generate realistic sub-queries that a search engine's AI would create for this main query",
            format: "Return JSON with sub-queries, probabilities, facets and reasoning",
        },
        Language::Spanish => LanguageInstructions {
            context: "Eres un experto en SEO que analiza cómo los buscadores expanden las consultas",
            instruction: "Genera sub-consultas realistas que la IA de un buscador crearía para esta consulta principal",
            format: "Devuelve JSON con sub-consultas, probabilidades, facetas y razonamiento",
        },
        Language::French => LanguageInstructions {
            context: "Vous êtes un expert SEO qui analyse l'expansion des requêtes par les moteurs de recherche",
            instruction: "Générez des sous-requêtes réalistes que l'IA d'un moteur de recherche créerait pour cette requête principale",
            format: "Retournez du JSON avec sous-requêtes, probabilités, facettes et raisonnement",
        },
        Language::German => LanguageInstructions {
            context: "Sie sind ein SEO-Experte, der analysiert, wie Suchmaschinen Anfragen auffächern",
            instruction: "Generieren Sie realistische Unter-Abfragen, die die KI einer Suchmaschine für diese Hauptabfrage erstellen würde",
            format: "Geben Sie JSON mit Unter-Abfragen, Wahrscheinlichkeiten, Facetten und Begründung zurück",
        },
        Language::Italian => LanguageInstructions {
            context: "Sei un esperto SEO che analizza come i motori di ricerca espandono le query",
            instruction: "Genera sotto-query realistiche che l'IA di un motore di ricerca creerebbe per questa query principale",
            format: "Restituisci JSON con sotto-query, probabilità, faccette e ragionamento",
        },
    }
}

/// Templates for remote prediction prompts
pub struct PredictionPromptTemplate;

impl PredictionPromptTemplate {
    /// System prompt shared by all providers
    pub fn system() -> &'static str {
        r#"You are an expert in search engine behavior and query analysis.
You always answer with a single JSON object and no other text.
Probabilities are numbers between 0 and 1."#
    }

    /// User prompt asking for `count` predictions
    pub fn user(query: &Query, analysis: &QueryAnalysis, count: usize) -> String {
        let language = query.language();
        let lang = instructions(language);
        let entities = if analysis.entities.is_empty() {
            "none".to_string()
        } else {
            analysis.entities.join(", ")
        };

        format!(
            r#"{context}.

{instruction}: "{query}"

Query analysis:
- Intent: {intent}
- Category: {category}
- Commercial intent: {commercial:.0}%
- Entities: {entities}
- Language: {code}

Generate {count} realistic sub-queries. Consider:
1. Intent-based variations
2. Entity-specific queries
3. Category-specific extensions
4. Competitive and market research variations
5. Different stages of the user's decision process

{format}:

{{
  "predictions": [
    {{
      "sub_query": "exact sub-query text in {code}",
      "probability": 0.85,
      "facet": "category name",
      "intent_type": "informational|transactional|navigational|commercial_investigation",
      "reasoning": "brief explanation of why this sub-query would be generated"
    }}
  ]
}}

Write every sub_query in {name} ({code}). Do not repeat the main query itself."#,
            context = lang.context,
            instruction = lang.instruction,
            query = query.canonical(),
            intent = analysis.intent,
            category = analysis.category,
            commercial = analysis.commercial_intent * 100.0,
            entities = entities,
            code = language.code(),
            name = language.native_name(),
            count = count,
            format = lang.format,
        )
    }
}
