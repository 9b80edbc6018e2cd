//! JSON output

use crate::output::formatter::OutputFormatter;
use fanout_domain::PredictionResult;

/// Renders the whole result as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_json(result: &PredictionResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &PredictionResult) -> String {
        Self::format_json(result)
    }
}
