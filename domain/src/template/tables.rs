//! Built-in template tables.
//!
//! Weights are fixed priors, not derived from the query.

use crate::analysis::{Category, Intent};
use crate::core::language::Language;

pub(super) struct Template {
    /// Output pattern; `{query}` is replaced with the canonical query,
    /// `{entity}` with an extracted entity
    pub pattern: &'static str,
    /// Skip the template when the query already contains this text
    pub modifier: &'static str,
    pub weight: f64,
    pub facet: &'static str,
}

const fn t(
    pattern: &'static str,
    modifier: &'static str,
    weight: f64,
    facet: &'static str,
) -> Template {
    Template {
        pattern,
        modifier,
        weight,
        facet,
    }
}

const EN_BASE: &[Template] = &[
    t("{query} reviews", "review", 0.87, "Reviews"),
    t("{query} comparison", "comparison", 0.76, "Comparison"),
    t("best {query}", "best", 0.72, "Recommendations"),
    t("how to choose {query}", "how to choose", 0.66, "Guide"),
    t("{query} guide", "guide", 0.61, "Guide"),
];

const ES_BASE: &[Template] = &[
    t("{query} reseñas", "reseña", 0.87, "Reseñas"),
    t("{query} comparación", "comparación", 0.76, "Comparación"),
    t("mejor {query}", "mejor", 0.72, "Recomendaciones"),
    t("cómo elegir {query}", "cómo elegir", 0.66, "Guía"),
    t("{query} guía", "guía", 0.61, "Guía"),
];

const FR_BASE: &[Template] = &[
    t("{query} avis", "avis", 0.87, "Avis"),
    t("{query} comparaison", "comparaison", 0.76, "Comparaison"),
    t("meilleur {query}", "meilleur", 0.72, "Recommandations"),
    t("comment choisir {query}", "comment choisir", 0.66, "Guide"),
    t("{query} guide", "guide", 0.61, "Guide"),
];

const DE_BASE: &[Template] = &[
    t("{query} bewertungen", "bewertung", 0.87, "Bewertungen"),
    t("{query} vergleich", "vergleich", 0.76, "Vergleich"),
    t("bester {query}", "beste", 0.72, "Empfehlungen"),
    t("wie man {query} wählt", "wie man", 0.66, "Leitfaden"),
    t("{query} leitfaden", "leitfaden", 0.61, "Leitfaden"),
];

const IT_BASE: &[Template] = &[
    t("{query} recensioni", "recension", 0.87, "Recensioni"),
    t("{query} confronto", "confronto", 0.76, "Confronto"),
    t("migliore {query}", "miglior", 0.72, "Raccomandazioni"),
    t("come scegliere {query}", "come scegliere", 0.66, "Guida"),
    t("{query} guida", "guida", 0.61, "Guida"),
];

pub(super) fn base_templates(language: Language) -> &'static [Template] {
    match language {
        Language::English => EN_BASE,
        Language::Spanish => ES_BASE,
        Language::French => FR_BASE,
        Language::German => DE_BASE,
        Language::Italian => IT_BASE,
    }
}

const EN_COMMERCIAL: &[Template] = &[
    t("{query} pros and cons", "pros and cons", 0.64, "Evaluation"),
    t("is {query} worth it", "worth it", 0.58, "Evaluation"),
    t("{query} alternatives", "alternative", 0.55, "Alternatives"),
];
const EN_TRANSACTIONAL: &[Template] = &[
    t("where to buy {query}", "where to buy", 0.68, "Purchase"),
    t("{query} discount", "discount", 0.6, "Deals"),
    t("cheapest {query}", "cheap", 0.57, "Deals"),
    t("{query} coupon code", "coupon", 0.5, "Deals"),
];
const EN_INFORMATIONAL: &[Template] = &[
    t("what is {query}", "what is", 0.65, "Definition"),
    t("{query} tutorial", "tutorial", 0.62, "Guide"),
    t("{query} benefits", "benefit", 0.54, "Benefits"),
];
const EN_NAVIGATIONAL: &[Template] = &[
    t("{query} official website", "official", 0.7, "Navigation"),
    t("{query} login", "login", 0.6, "Navigation"),
];

const ES_COMMERCIAL: &[Template] = &[
    t("{query} ventajas y desventajas", "ventajas", 0.64, "Evaluación"),
    t("vale la pena {query}", "vale la pena", 0.58, "Evaluación"),
    t("alternativas a {query}", "alternativa", 0.55, "Alternativas"),
];
const ES_TRANSACTIONAL: &[Template] = &[
    t("dónde comprar {query}", "dónde comprar", 0.68, "Compra"),
    t("{query} descuento", "descuento", 0.6, "Ofertas"),
    t("{query} más barato", "barat", 0.57, "Ofertas"),
];
const ES_INFORMATIONAL: &[Template] = &[
    t("qué es {query}", "qué es", 0.65, "Definición"),
    t("{query} tutorial", "tutorial", 0.62, "Guía"),
    t("{query} beneficios", "beneficio", 0.54, "Beneficios"),
];
const ES_NAVIGATIONAL: &[Template] = &[t("{query} sitio oficial", "oficial", 0.7, "Navegación")];

const FR_COMMERCIAL: &[Template] = &[
    t("{query} avantages et inconvénients", "avantages", 0.64, "Évaluation"),
    t("{query} vaut-il le coup", "vaut", 0.58, "Évaluation"),
    t("alternatives à {query}", "alternative", 0.55, "Alternatives"),
];
const FR_TRANSACTIONAL: &[Template] = &[
    t("où acheter {query}", "où acheter", 0.68, "Achat"),
    t("{query} promotion", "promo", 0.6, "Offres"),
    t("{query} pas cher", "pas cher", 0.57, "Offres"),
];
const FR_INFORMATIONAL: &[Template] = &[
    t("qu'est-ce que {query}", "qu'est-ce", 0.65, "Définition"),
    t("{query} tutoriel", "tutoriel", 0.62, "Guide"),
    t("{query} avantages", "avantages", 0.54, "Avantages"),
];
const FR_NAVIGATIONAL: &[Template] = &[t("{query} site officiel", "officiel", 0.7, "Navigation")];

const DE_COMMERCIAL: &[Template] = &[
    t("{query} vor- und nachteile", "nachteile", 0.64, "Bewertung"),
    t("lohnt sich {query}", "lohnt", 0.58, "Bewertung"),
    t("{query} alternativen", "alternative", 0.55, "Alternativen"),
];
const DE_TRANSACTIONAL: &[Template] = &[
    t("{query} kaufen", "kauf", 0.68, "Kauf"),
    t("{query} rabatt", "rabatt", 0.6, "Angebote"),
    t("{query} günstig", "günstig", 0.57, "Angebote"),
];
const DE_INFORMATIONAL: &[Template] = &[
    t("was ist {query}", "was ist", 0.65, "Definition"),
    t("{query} anleitung", "anleitung", 0.62, "Leitfaden"),
    t("{query} vorteile", "vorteil", 0.54, "Vorteile"),
];
const DE_NAVIGATIONAL: &[Template] =
    &[t("{query} offizielle website", "offiziell", 0.7, "Navigation")];

const IT_COMMERCIAL: &[Template] = &[
    t("{query} pro e contro", "pro e contro", 0.64, "Valutazione"),
    t("{query} ne vale la pena", "vale la pena", 0.58, "Valutazione"),
    t("alternative a {query}", "alternativ", 0.55, "Alternative"),
];
const IT_TRANSACTIONAL: &[Template] = &[
    t("dove comprare {query}", "dove comprare", 0.68, "Acquisto"),
    t("{query} sconto", "sconto", 0.6, "Offerte"),
    t("{query} economico", "economic", 0.57, "Offerte"),
];
const IT_INFORMATIONAL: &[Template] = &[
    t("cos'è {query}", "cos'è", 0.65, "Definizione"),
    t("{query} tutorial", "tutorial", 0.62, "Guida"),
    t("{query} vantaggi", "vantaggi", 0.54, "Vantaggi"),
];
const IT_NAVIGATIONAL: &[Template] = &[t("{query} sito ufficiale", "ufficiale", 0.7, "Navigazione")];

pub(super) fn intent_templates(language: Language, intent: Intent) -> &'static [Template] {
    match (language, intent) {
        (_, Intent::Mixed) => &[],
        (Language::English, Intent::CommercialInvestigation) => EN_COMMERCIAL,
        (Language::English, Intent::Transactional) => EN_TRANSACTIONAL,
        (Language::English, Intent::Informational) => EN_INFORMATIONAL,
        (Language::English, Intent::Navigational) => EN_NAVIGATIONAL,
        (Language::Spanish, Intent::CommercialInvestigation) => ES_COMMERCIAL,
        (Language::Spanish, Intent::Transactional) => ES_TRANSACTIONAL,
        (Language::Spanish, Intent::Informational) => ES_INFORMATIONAL,
        (Language::Spanish, Intent::Navigational) => ES_NAVIGATIONAL,
        (Language::French, Intent::CommercialInvestigation) => FR_COMMERCIAL,
        (Language::French, Intent::Transactional) => FR_TRANSACTIONAL,
        (Language::French, Intent::Informational) => FR_INFORMATIONAL,
        (Language::French, Intent::Navigational) => FR_NAVIGATIONAL,
        (Language::German, Intent::CommercialInvestigation) => DE_COMMERCIAL,
        (Language::German, Intent::Transactional) => DE_TRANSACTIONAL,
        (Language::German, Intent::Informational) => DE_INFORMATIONAL,
        (Language::German, Intent::Navigational) => DE_NAVIGATIONAL,
        (Language::Italian, Intent::CommercialInvestigation) => IT_COMMERCIAL,
        (Language::Italian, Intent::Transactional) => IT_TRANSACTIONAL,
        (Language::Italian, Intent::Informational) => IT_INFORMATIONAL,
        (Language::Italian, Intent::Navigational) => IT_NAVIGATIONAL,
    }
}

const EN_TECHNOLOGY: &[Template] = &[
    t("{query} setup", "setup", 0.58, "Technology Context"),
    t("{query} compatibility", "compatib", 0.53, "Technology Context"),
];
const EN_ECOMMERCE: &[Template] = &[
    t("{query} warranty", "warrant", 0.57, "Shopping Context"),
    t("{query} return policy", "return polic", 0.51, "Shopping Context"),
];
const EN_HEALTH: &[Template] = &[
    t("{query} side effects", "side effect", 0.59, "Health Context"),
    t("{query} dosage", "dosage", 0.52, "Health Context"),
];
const EN_GENERAL: &[Template] = &[
    t("{query} tips", "tips", 0.5, "Tips"),
    t("{query} recommendations", "recommendation", 0.48, "Tips"),
];

const ES_TECHNOLOGY: &[Template] = &[
    t("{query} configuración", "configuración", 0.58, "Contexto tecnológico"),
    t("{query} compatibilidad", "compatib", 0.53, "Contexto tecnológico"),
];
const ES_ECOMMERCE: &[Template] = &[
    t("{query} garantía", "garantía", 0.57, "Contexto de compra"),
    t("{query} política de devolución", "devoluci", 0.51, "Contexto de compra"),
];
const ES_HEALTH: &[Template] = &[
    t("{query} efectos secundarios", "efectos secundarios", 0.59, "Contexto de salud"),
    t("{query} dosis", "dosis", 0.52, "Contexto de salud"),
];
const ES_GENERAL: &[Template] = &[
    t("{query} consejos", "consejo", 0.5, "Consejos"),
    t("{query} recomendaciones", "recomendaci", 0.48, "Consejos"),
];

const FR_TECHNOLOGY: &[Template] = &[
    t("{query} installation", "installation", 0.58, "Contexte technologique"),
    t("{query} compatibilité", "compatib", 0.53, "Contexte technologique"),
];
const FR_ECOMMERCE: &[Template] = &[
    t("{query} garantie", "garantie", 0.57, "Contexte d'achat"),
    t("{query} politique de retour", "retour", 0.51, "Contexte d'achat"),
];
const FR_HEALTH: &[Template] = &[
    t("{query} effets secondaires", "effets secondaires", 0.59, "Contexte santé"),
    t("{query} posologie", "posologie", 0.52, "Contexte santé"),
];
const FR_GENERAL: &[Template] = &[
    t("{query} conseils", "conseil", 0.5, "Conseils"),
    t("{query} recommandations", "recommandation", 0.48, "Conseils"),
];

const DE_TECHNOLOGY: &[Template] = &[
    t("{query} einrichtung", "einrichtung", 0.58, "Technik-Kontext"),
    t("{query} kompatibilität", "kompatib", 0.53, "Technik-Kontext"),
];
const DE_ECOMMERCE: &[Template] = &[
    t("{query} garantie", "garantie", 0.57, "Einkaufskontext"),
    t("{query} rückgabe", "rückgabe", 0.51, "Einkaufskontext"),
];
const DE_HEALTH: &[Template] = &[
    t("{query} nebenwirkungen", "nebenwirkung", 0.59, "Gesundheitskontext"),
    t("{query} dosierung", "dosierung", 0.52, "Gesundheitskontext"),
];
const DE_GENERAL: &[Template] = &[
    t("{query} tipps", "tipp", 0.5, "Tipps"),
    t("{query} empfehlungen", "empfehlung", 0.48, "Tipps"),
];

const IT_TECHNOLOGY: &[Template] = &[
    t("{query} configurazione", "configurazione", 0.58, "Contesto tecnologico"),
    t("{query} compatibilità", "compatib", 0.53, "Contesto tecnologico"),
];
const IT_ECOMMERCE: &[Template] = &[
    t("{query} garanzia", "garanzia", 0.57, "Contesto d'acquisto"),
    t("{query} politica di reso", "di reso", 0.51, "Contesto d'acquisto"),
];
const IT_HEALTH: &[Template] = &[
    t("{query} effetti collaterali", "effetti collaterali", 0.59, "Contesto salute"),
    t("{query} dosaggio", "dosaggio", 0.52, "Contesto salute"),
];
const IT_GENERAL: &[Template] = &[
    t("{query} consigli", "consigl", 0.5, "Consigli"),
    t("{query} raccomandazioni", "raccomandazion", 0.48, "Consigli"),
];

/// Category-contextual family; categories without a table get tips.
pub(super) fn context_templates(language: Language, category: Category) -> &'static [Template] {
    match (language, category) {
        (Language::English, Category::Technology) => EN_TECHNOLOGY,
        (Language::English, Category::Ecommerce) => EN_ECOMMERCE,
        (Language::English, Category::Health) => EN_HEALTH,
        (Language::English, _) => EN_GENERAL,
        (Language::Spanish, Category::Technology) => ES_TECHNOLOGY,
        (Language::Spanish, Category::Ecommerce) => ES_ECOMMERCE,
        (Language::Spanish, Category::Health) => ES_HEALTH,
        (Language::Spanish, _) => ES_GENERAL,
        (Language::French, Category::Technology) => FR_TECHNOLOGY,
        (Language::French, Category::Ecommerce) => FR_ECOMMERCE,
        (Language::French, Category::Health) => FR_HEALTH,
        (Language::French, _) => FR_GENERAL,
        (Language::German, Category::Technology) => DE_TECHNOLOGY,
        (Language::German, Category::Ecommerce) => DE_ECOMMERCE,
        (Language::German, Category::Health) => DE_HEALTH,
        (Language::German, _) => DE_GENERAL,
        (Language::Italian, Category::Technology) => IT_TECHNOLOGY,
        (Language::Italian, Category::Ecommerce) => IT_ECOMMERCE,
        (Language::Italian, Category::Health) => IT_HEALTH,
        (Language::Italian, _) => IT_GENERAL,
    }
}

const EN_ENTITY: &[Template] = &[
    t("{entity} specifications", "specification", 0.6, "Technical Details"),
    t("{entity} problems", "problem", 0.55, "Issues & Support"),
];
const ES_ENTITY: &[Template] = &[
    t("{entity} especificaciones", "especificaci", 0.6, "Detalles técnicos"),
    t("{entity} problemas", "problema", 0.55, "Problemas y soporte"),
];
const FR_ENTITY: &[Template] = &[
    t("{entity} caractéristiques", "caractéristique", 0.6, "Détails techniques"),
    t("{entity} problèmes", "problème", 0.55, "Problèmes et assistance"),
];
const DE_ENTITY: &[Template] = &[
    t("{entity} technische daten", "technische daten", 0.6, "Technische Details"),
    t("{entity} probleme", "problem", 0.55, "Probleme und Support"),
];
const IT_ENTITY: &[Template] = &[
    t("{entity} specifiche", "specifiche", 0.6, "Dettagli tecnici"),
    t("{entity} problemi", "problem", 0.55, "Problemi e assistenza"),
];

/// Per-entity family for brand and product entities.
pub(super) fn entity_templates(language: Language) -> &'static [Template] {
    match language {
        Language::English => EN_ENTITY,
        Language::Spanish => ES_ENTITY,
        Language::French => FR_ENTITY,
        Language::German => DE_ENTITY,
        Language::Italian => IT_ENTITY,
    }
}

const EN_COMPETITIVE: &[Template] = &[
    t("{query} market share", "market share", 0.47, "Market Intelligence"),
    t("top competitors {query}", "competitor", 0.45, "Market Intelligence"),
    t("{query} market trends", "market trend", 0.42, "Market Intelligence"),
];
const ES_COMPETITIVE: &[Template] = &[
    t("{query} cuota de mercado", "cuota de mercado", 0.47, "Inteligencia de mercado"),
    t("principales competidores {query}", "competidor", 0.45, "Inteligencia de mercado"),
    t("{query} tendencias del mercado", "tendencia", 0.42, "Inteligencia de mercado"),
];
const FR_COMPETITIVE: &[Template] = &[
    t("{query} part de marché", "part de marché", 0.47, "Veille concurrentielle"),
    t("principaux concurrents {query}", "concurrent", 0.45, "Veille concurrentielle"),
    t("{query} tendances du marché", "tendance", 0.42, "Veille concurrentielle"),
];
const DE_COMPETITIVE: &[Template] = &[
    t("{query} marktanteil", "marktanteil", 0.47, "Marktanalyse"),
    t("top-wettbewerber {query}", "wettbewerber", 0.45, "Marktanalyse"),
    t("{query} markttrends", "markttrend", 0.42, "Marktanalyse"),
];
const IT_COMPETITIVE: &[Template] = &[
    t("{query} quota di mercato", "quota di mercato", 0.47, "Analisi di mercato"),
    t("principali concorrenti {query}", "concorrent", 0.45, "Analisi di mercato"),
    t("{query} tendenze di mercato", "tendenz", 0.42, "Analisi di mercato"),
];

/// Market family for strongly commercial queries.
pub(super) fn competitive_templates(language: Language) -> &'static [Template] {
    match language {
        Language::English => EN_COMPETITIVE,
        Language::Spanish => ES_COMPETITIVE,
        Language::French => FR_COMPETITIVE,
        Language::German => DE_COMPETITIVE,
        Language::Italian => IT_COMPETITIVE,
    }
}
