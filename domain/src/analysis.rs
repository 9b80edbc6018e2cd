//! Deterministic query analysis.
//!
//! Classifies a [`Query`] by search intent, topical category, commercial
//! intent and complexity, and pulls out simple entities (years, well-known
//! brands and product nouns). The template engine uses the analysis to pick
//! template families; remote prompts embed it as context for the model.

use crate::core::language::Language;
use crate::query::entities::Query;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("year pattern is valid"));

static PRODUCT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:iphone|samsung|apple|google|microsoft|tesla|nike|adidas|macbook|laptop|smartphone|camera)\b",
    )
    .expect("product pattern is valid")
});

/// Search intent behind a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Informational,
    Transactional,
    Navigational,
    CommercialInvestigation,
    Mixed,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Informational => "informational",
            Intent::Transactional => "transactional",
            Intent::Navigational => "navigational",
            Intent::CommercialInvestigation => "commercial_investigation",
            Intent::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topical category of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Ecommerce,
    Health,
    Education,
    Travel,
    Food,
    Finance,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Ecommerce => "ecommerce",
            Category::Health => "health",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Food => "food",
            Category::Finance => "finance",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    fn from_word_count(words: usize) -> Self {
        match words {
            0..=2 => Complexity::Simple,
            3..=4 => Complexity::Medium,
            _ => Complexity::Complex,
        }
    }
}

/// Result of analyzing a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryAnalysis {
    pub language: Language,
    pub intent: Intent,
    pub category: Category,
    /// Share of commercial signals, saturating at three signals
    pub commercial_intent: f64,
    pub complexity: Complexity,
    /// Years and known brand/product words, in order of appearance
    pub entities: Vec<String>,
}

impl QueryAnalysis {
    /// First four-digit year mentioned in the query
    pub fn year(&self) -> Option<u32> {
        self.entities.iter().find_map(|e| {
            if e.len() == 4 && e.chars().all(|c| c.is_ascii_digit()) {
                e.parse().ok()
            } else {
                None
            }
        })
    }
}

struct IntentKeywords {
    informational: &'static [&'static str],
    transactional: &'static [&'static str],
    navigational: &'static [&'static str],
    commercial: &'static [&'static str],
}

fn intent_keywords(language: Language) -> IntentKeywords {
    match language {
        Language::English => IntentKeywords {
            informational: &["what", "how", "why", "when", "where", "definition", "meaning", "guide"],
            transactional: &["buy", "purchase", "order", "price", "cost", "cheap", "deal", "discount"],
            navigational: &["website", "login", "official", "homepage"],
            commercial: &["best", "top", "review", "reviews", "comparison", "vs", "alternative"],
        },
        Language::Spanish => IntentKeywords {
            informational: &["qué", "cómo", "por qué", "cuándo", "dónde", "definición", "significado", "guía"],
            transactional: &["comprar", "compra", "pedir", "precio", "costo", "barato", "oferta", "descuento"],
            navigational: &["sitio web", "página", "oficial", "inicio"],
            commercial: &["mejor", "mejores", "reseña", "reseñas", "comparación", "vs", "alternativa"],
        },
        Language::French => IntentKeywords {
            informational: &["quoi", "comment", "pourquoi", "quand", "où", "définition", "signification", "guide"],
            transactional: &["acheter", "achat", "commander", "prix", "coût", "pas cher", "offre", "remise"],
            navigational: &["site web", "connexion", "officiel", "accueil"],
            commercial: &["meilleur", "meilleurs", "top", "avis", "comparaison", "vs", "alternative"],
        },
        Language::German => IntentKeywords {
            informational: &["was", "wie", "warum", "wann", "wo", "definition", "bedeutung", "anleitung"],
            transactional: &["kaufen", "kauf", "bestellen", "preis", "kosten", "günstig", "angebot", "rabatt"],
            navigational: &["website", "anmeldung", "offiziell", "startseite"],
            commercial: &["beste", "besten", "top", "bewertung", "vergleich", "vs", "alternative"],
        },
        Language::Italian => IntentKeywords {
            informational: &["cosa", "come", "perché", "quando", "dove", "definizione", "significato", "guida"],
            transactional: &["comprare", "acquisto", "ordinare", "prezzo", "costo", "economico", "offerta", "sconto"],
            navigational: &["sito web", "login", "ufficiale", "homepage"],
            commercial: &["migliore", "migliori", "top", "recensione", "confronto", "vs", "alternativa"],
        },
    }
}

fn category_keywords(language: Language) -> &'static [(Category, &'static [&'static str])] {
    match language {
        Language::English => &[
            (Category::Technology, &["tech", "software", "app", "computer", "phone", "smartphone", "smartphones", "laptop", "laptops", "ai", "digital"]),
            (Category::Ecommerce, &["buy", "shop", "store", "product", "brand", "price"]),
            (Category::Health, &["health", "medical", "doctor", "treatment", "symptoms", "disease"]),
            (Category::Education, &["learn", "course", "school", "university", "study", "tutorial"]),
            (Category::Travel, &["travel", "hotel", "flight", "vacation", "trip", "destination", "destinations"]),
            (Category::Food, &["recipe", "restaurant", "restaurants", "food", "cooking", "meal", "diet"]),
            (Category::Finance, &["money", "investment", "bank", "loan", "insurance", "financial"]),
        ],
        Language::Spanish => &[
            (Category::Technology, &["tecnología", "software", "app", "ordenador", "teléfono", "portátil", "ia", "digital"]),
            (Category::Ecommerce, &["comprar", "tienda", "producto", "marca", "precio"]),
            (Category::Health, &["salud", "médico", "doctor", "tratamiento", "síntomas", "enfermedad"]),
            (Category::Education, &["aprender", "curso", "escuela", "universidad", "estudiar", "tutorial"]),
            (Category::Travel, &["viajar", "hotel", "vuelo", "vacaciones", "viaje", "destino"]),
            (Category::Food, &["receta", "restaurante", "comida", "cocinar", "dieta"]),
            (Category::Finance, &["dinero", "inversión", "banco", "préstamo", "seguro", "financiero"]),
        ],
        Language::French => &[
            (Category::Technology, &["technologie", "logiciel", "app", "ordinateur", "téléphone", "portable", "ia", "numérique"]),
            (Category::Ecommerce, &["acheter", "magasin", "produit", "marque", "prix"]),
            (Category::Health, &["santé", "médical", "docteur", "traitement", "symptômes", "maladie"]),
            (Category::Education, &["apprendre", "cours", "école", "université", "étudier", "tutoriel"]),
            (Category::Travel, &["voyager", "hôtel", "vol", "vacances", "voyage", "destination"]),
            (Category::Food, &["recette", "restaurant", "nourriture", "cuisiner", "repas", "régime"]),
            (Category::Finance, &["argent", "investissement", "banque", "prêt", "assurance", "financier"]),
        ],
        Language::German => &[
            (Category::Technology, &["technologie", "software", "app", "computer", "telefon", "laptop", "ki", "digital"]),
            (Category::Ecommerce, &["kaufen", "geschäft", "produkt", "marke", "preis"]),
            (Category::Health, &["gesundheit", "medizinisch", "arzt", "behandlung", "symptome", "krankheit"]),
            (Category::Education, &["lernen", "kurs", "schule", "universität", "studieren", "tutorial"]),
            (Category::Travel, &["reisen", "hotel", "flug", "urlaub", "reise", "ziel"]),
            (Category::Food, &["rezept", "restaurant", "essen", "kochen", "mahlzeit", "diät"]),
            (Category::Finance, &["geld", "investition", "bank", "kredit", "versicherung", "finanziell"]),
        ],
        Language::Italian => &[
            (Category::Technology, &["tecnologia", "software", "app", "computer", "telefono", "laptop", "ia", "digitale"]),
            (Category::Ecommerce, &["comprare", "negozio", "prodotto", "marca", "prezzo"]),
            (Category::Health, &["salute", "medico", "dottore", "trattamento", "sintomi", "malattia"]),
            (Category::Education, &["imparare", "corso", "scuola", "università", "studiare", "tutorial"]),
            (Category::Travel, &["viaggiare", "hotel", "volo", "vacanze", "viaggio", "destinazione"]),
            (Category::Food, &["ricetta", "ristorante", "cibo", "cucinare", "pasto", "dieta"]),
            (Category::Finance, &["denaro", "investimento", "banca", "prestito", "assicurazione", "finanziario"]),
        ],
    }
}

/// Match a keyword against the query: phrases by substring, single words by
/// whole token so that `how` does not match `show`.
fn mentions(lower: &str, tokens: &[&str], keyword: &str) -> bool {
    if keyword.contains(' ') {
        lower.contains(keyword)
    } else {
        tokens.contains(&keyword)
    }
}

/// Stateless analyzer over the built-in keyword tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryAnalyzer;

impl QueryAnalyzer {
    pub fn analyze(&self, query: &Query) -> QueryAnalysis {
        let language = query.language();
        let lower = query.canonical().to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let keywords = intent_keywords(language);
        let any = |list: &[&str]| list.iter().any(|kw| mentions(&lower, &tokens, kw));

        let intent = if any(keywords.informational) {
            Intent::Informational
        } else if any(keywords.transactional) {
            Intent::Transactional
        } else if any(keywords.navigational) {
            Intent::Navigational
        } else if any(keywords.commercial) {
            Intent::CommercialInvestigation
        } else {
            Intent::Mixed
        };

        let category = category_keywords(language)
            .iter()
            .find(|entry| any(entry.1))
            .map(|entry| entry.0)
            .unwrap_or(Category::General);

        let signals = keywords
            .transactional
            .iter()
            .chain(keywords.commercial)
            .filter(|kw| mentions(&lower, &tokens, kw))
            .count();
        let commercial_intent = (signals as f64 / 3.0).min(1.0);

        QueryAnalysis {
            language,
            intent,
            category,
            commercial_intent,
            complexity: Complexity::from_word_count(tokens.len()),
            entities: extract_entities(query.canonical()),
        }
    }
}

fn extract_entities(text: &str) -> Vec<String> {
    let mut found: Vec<(usize, String)> = YEAR_PATTERN
        .find_iter(text)
        .chain(PRODUCT_PATTERN.find_iter(text))
        .map(|m| (m.start(), m.as_str().to_lowercase()))
        .collect();
    found.sort_by_key(|(start, _)| *start);

    let mut entities: Vec<String> = Vec::new();
    for (_, entity) in found {
        if !entities.contains(&entity) {
            entities.push(entity);
        }
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::normalizer::QueryNormalizer;

    fn analyze(text: &str, language: Language) -> QueryAnalysis {
        let query = QueryNormalizer::default()
            .normalize(text, Some(language))
            .unwrap();
        QueryAnalyzer.analyze(&query)
    }

    #[test]
    fn test_commercial_investigation() {
        let a = analyze("best smartphones 2024", Language::English);
        assert_eq!(a.intent, Intent::CommercialInvestigation);
        assert_eq!(a.category, Category::Technology);
        assert_eq!(a.complexity, Complexity::Medium);
        assert_eq!(a.entities, vec!["2024".to_string()]);
        assert_eq!(a.year(), Some(2024));
    }

    #[test]
    fn test_informational_takes_precedence() {
        let a = analyze("how to buy the best laptop", Language::English);
        assert_eq!(a.intent, Intent::Informational);
        assert_eq!(a.entities, vec!["laptop".to_string()]);
    }

    #[test]
    fn test_whole_word_matching() {
        // "show" must not count as "how"
        let a = analyze("tv show tonight", Language::English);
        assert_eq!(a.intent, Intent::Mixed);
        assert_eq!(a.category, Category::General);
    }

    #[test]
    fn test_transactional_spanish() {
        let a = analyze("comprar portátil barato", Language::Spanish);
        assert_eq!(a.intent, Intent::Transactional);
        assert_eq!(a.category, Category::Technology);
        assert!((a.commercial_intent - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_phrase_keyword() {
        let a = analyze("vélo pas cher", Language::French);
        assert_eq!(a.intent, Intent::Transactional);
    }

    #[test]
    fn test_commercial_intent_saturates() {
        let a = analyze("best cheap deal price buy", Language::English);
        assert_eq!(a.commercial_intent, 1.0);
        assert_eq!(a.complexity, Complexity::Complex);
    }

    #[test]
    fn test_entities_in_order_and_deduped() {
        let a = analyze("iPhone vs Samsung 2024 iphone", Language::English);
        assert_eq!(
            a.entities,
            vec!["iphone".to_string(), "samsung".to_string(), "2024".to_string()]
        );
    }
}
