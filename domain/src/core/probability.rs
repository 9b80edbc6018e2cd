//! Probability value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A relative-ranking score in `[0.0, 1.0]` (Value Object)
///
/// Scores come from template priors or from model-stated confidence. They
/// are treated as an opaque ordering signal, not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Probability = Probability(0.0);
    pub const ONE: Probability = Probability(1.0);

    /// Create a probability, returning `None` for NaN or out-of-range values
    pub fn try_new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a probability, clamping into range (NaN becomes 0.0)
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whole-number percentage, e.g. `87` for `0.87`
    pub fn percent(&self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Probability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Probability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Probability::try_new(value).ok_or_else(|| {
            serde::de::Error::custom(format!("probability {} outside [0, 1]", value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert!(Probability::try_new(0.0).is_some());
        assert!(Probability::try_new(1.0).is_some());
        assert!(Probability::try_new(1.5).is_none());
        assert!(Probability::try_new(-0.1).is_none());
        assert!(Probability::try_new(f64::NAN).is_none());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Probability::clamped(1.2).value(), 1.0);
        assert_eq!(Probability::clamped(-3.0).value(), 0.0);
        assert_eq!(Probability::clamped(f64::NAN).value(), 0.0);
    }

    #[test]
    fn test_display_and_percent() {
        let p = Probability::try_new(0.876).unwrap();
        assert_eq!(p.to_string(), "0.88");
        assert_eq!(p.percent(), 88);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Probability>("0.4").is_ok());
        assert!(serde_json::from_str::<Probability>("1.5").is_err());
    }
}
