//! Output formatter trait

use fanout_domain::PredictionResult;

/// Trait for rendering prediction results
pub trait OutputFormatter {
    fn format(&self, result: &PredictionResult) -> String;
}
