//! Domain error types

use thiserror::Error;

/// Errors raised while validating user input.
///
/// These are the only failures that reach the user as hard stops; they
/// require the user to change their input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Query is empty")]
    Empty,

    #[error("Query is too long: {len} characters (max: {max})")]
    TooLong { len: usize, max: usize },
}

impl ValidationError {
    /// Short corrective message suitable for showing next to the input box.
    pub fn hint(&self) -> String {
        match self {
            ValidationError::Empty => "Enter a query to analyze.".to_string(),
            ValidationError::TooLong { max, .. } => {
                format!("Shorten the query to at most {} characters.", max)
            }
        }
    }
}

/// Errors raised when a model response does not match the prediction schema.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("No JSON found in response")]
    NoJson,

    #[error("Malformed prediction payload: {0}")]
    Malformed(String),

    #[error("Prediction {index} has probability {value} outside [0, 1]")]
    ProbabilityOutOfRange { index: usize, value: f64 },

    #[error("Prediction {index} has an empty sub_query")]
    EmptySubQuery { index: usize },

    #[error("Response contains no predictions")]
    TooFew,

    #[error("Response contains {count} predictions (max: {max})")]
    TooMany { count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_display() {
        let error = ValidationError::TooLong { len: 300, max: 256 };
        assert_eq!(
            error.to_string(),
            "Query is too long: 300 characters (max: 256)"
        );
        assert!(error.hint().contains("256"));
    }

    #[test]
    fn test_schema_error_display() {
        let error = SchemaError::ProbabilityOutOfRange {
            index: 2,
            value: 1.5,
        };
        assert_eq!(
            error.to_string(),
            "Prediction 2 has probability 1.5 outside [0, 1]"
        );
    }
}
