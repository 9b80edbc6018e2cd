//! Language value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Languages the pipeline can analyze (Value Object)
///
/// The language selects the template table, the keyword lists used by
/// query analysis, and the instructions embedded in remote prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
    ];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Italian => "Italiano",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" => Ok(Language::Spanish),
            "fr" | "french" => Ok(Language::French),
            "de" | "german" => Ok(Language::German),
            "it" | "italian" => Ok(Language::Italian),
            other => Err(format!(
                "unsupported language '{}' (expected one of: en, es, fr, de, it)",
                other
            )),
        }
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ES".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!(" fr ".parse::<Language>().unwrap(), Language::French);
        assert_eq!("german".parse::<Language>().unwrap(), Language::German);
        assert!("pt".parse::<Language>().is_err());
    }

    #[test]
    fn test_display_is_code() {
        for language in Language::ALL {
            assert_eq!(language.to_string(), language.code());
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_serde_as_code() {
        let json = serde_json::to_string(&Language::Italian).unwrap();
        assert_eq!(json, "\"it\"");
        let back: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(back, Language::German);
        assert!(serde_json::from_str::<Language>("\"xx\"").is_err());
    }
}
