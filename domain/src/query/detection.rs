//! Language detection for queries submitted without a declared language.
//!
//! The built-in [`KeywordLanguageDetector`] scores each supported language by
//! the function words and search vocabulary it shares with the query. A token
//! that belongs to several languages is split evenly between them, so
//! ambiguous words like `la` or `de` contribute little evidence.

use crate::core::language::Language;

/// Outcome of language detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageDetection {
    pub language: Language,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
}

/// Detects the language of a short query.
pub trait LanguageDetector: Send + Sync {
    /// Returns `None` when the text carries no evidence for any language.
    fn detect(&self, text: &str) -> Option<LanguageDetection>;
}

/// Evidence below this total is damped so that a single keyword hit cannot
/// reach full confidence.
const EVIDENCE_FLOOR: f64 = 1.5;

const EN_WORDS: &[&str] = &[
    "the", "and", "for", "with", "how", "what", "why", "when", "where", "best", "buy", "cheap",
    "price", "reviews", "review", "near", "me", "is", "to", "of", "vs", "which", "online",
    "purchase", "discount", "deal", "comparison", "meaning", "official", "course", "learn",
    "recipe", "travel", "flight", "money", "health",
];

const ES_WORDS: &[&str] = &[
    "el", "la", "los", "las", "de", "del", "para", "con", "y", "por", "en", "qué", "que",
    "cómo", "como", "cuándo", "dónde", "mejor", "mejores", "comprar", "compra", "precio",
    "barato", "oferta", "descuento", "reseña", "reseñas", "comparación", "guía", "viaje",
    "vuelo", "receta", "salud", "dinero", "aprender", "curso", "tienda",
];

const FR_WORDS: &[&str] = &[
    "le", "la", "les", "des", "du", "de", "pour", "avec", "et", "en", "comment", "quoi",
    "pourquoi", "quand", "où", "meilleur", "meilleurs", "meilleure", "acheter", "achat", "prix",
    "cher", "offre", "remise", "avis", "comparaison", "voyage", "vol", "recette", "santé",
    "argent", "apprendre", "cours", "magasin",
];

const DE_WORDS: &[&str] = &[
    "der", "die", "das", "und", "für", "mit", "ist", "ein", "eine", "wie", "was", "warum",
    "wann", "wo", "beste", "besten", "bester", "kaufen", "kauf", "preis", "günstig", "angebot",
    "rabatt", "bewertung", "bewertungen", "vergleich", "reise", "flug", "rezept", "gesundheit",
    "geld", "lernen", "kurs", "anleitung",
];

const IT_WORDS: &[&str] = &[
    "il", "lo", "gli", "la", "le", "di", "del", "della", "per", "con", "e", "come", "cosa",
    "perché", "quando", "dove", "migliore", "migliori", "comprare", "acquisto", "prezzo",
    "economico", "offerta", "sconto", "recensione", "recensioni", "confronto", "guida",
    "viaggio", "volo", "ricetta", "salute", "denaro", "imparare", "corso", "negozio",
];

fn vocabulary(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => EN_WORDS,
        Language::Spanish => ES_WORDS,
        Language::French => FR_WORDS,
        Language::German => DE_WORDS,
        Language::Italian => IT_WORDS,
    }
}

/// Characters that are strong hints for a single language.
fn accent_hint(c: char) -> Option<Language> {
    match c {
        'ñ' | '¿' | '¡' => Some(Language::Spanish),
        'ç' | 'ê' | 'â' | 'î' | 'ô' | 'û' | 'œ' => Some(Language::French),
        'ß' | 'ä' | 'ö' | 'ü' => Some(Language::German),
        'ì' | 'ò' => Some(Language::Italian),
        _ => None,
    }
}

fn index_of(language: Language) -> usize {
    Language::ALL
        .iter()
        .position(|l| *l == language)
        .unwrap_or_default()
}

/// Keyword-based detector over the built-in vocabularies.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordLanguageDetector;

impl KeywordLanguageDetector {
    /// Raw evidence per language, indexed like [`Language::ALL`].
    fn scores(text: &str) -> [f64; 5] {
        let lower = text.to_lowercase();
        let mut scores = [0.0; 5];

        for token in lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let owners: Vec<usize> = Language::ALL
                .iter()
                .enumerate()
                .filter(|(_, l)| vocabulary(**l).contains(&token))
                .map(|(i, _)| i)
                .collect();
            if owners.is_empty() {
                continue;
            }
            let share = 1.0 / owners.len() as f64;
            for i in owners {
                scores[i] += share;
            }
        }

        let mut hinted = [false; 5];
        for c in lower.chars() {
            if let Some(language) = accent_hint(c) {
                hinted[index_of(language)] = true;
            }
        }
        for (i, hit) in hinted.iter().enumerate() {
            if *hit {
                scores[i] += 1.0;
            }
        }

        scores
    }
}

impl LanguageDetector for KeywordLanguageDetector {
    fn detect(&self, text: &str) -> Option<LanguageDetection> {
        let scores = Self::scores(text);
        let total: f64 = scores.iter().sum();
        if total <= 0.0 {
            return None;
        }

        // First maximum wins, so ties resolve in `Language::ALL` order
        let (best, best_score) = scores
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, s)| if *s > acc.1 { (i, *s) } else { acc });

        let damping = (total / EVIDENCE_FLOOR).min(1.0);
        Some(LanguageDetection {
            language: Language::ALL[best],
            confidence: (best_score / total) * damping,
        })
    }
}
