//! Console output formatter for prediction results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use fanout_domain::util::truncate_str;
use fanout_domain::{ConfidenceBand, PredictionResult, SubQueryPrediction};

const WIDTH: usize = 72;
const TEXT_COLUMN: usize = 46;

/// Formats prediction results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete result as a numbered table
    pub fn format(result: &PredictionResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Fan-Out Sub-Query Predictions"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Query:".cyan().bold(),
            result.query().canonical()
        ));
        let model = result
            .provider()
            .model
            .as_deref()
            .map(|m| format!(" ({})", m))
            .unwrap_or_default();
        output.push_str(&format!(
            "{} {}  {} {}{}  {} {}\n",
            "Language:".cyan().bold(),
            result.query().language(),
            "Provider:".cyan().bold(),
            result.provider().provider,
            model,
            "Served by:".cyan().bold(),
            result.served_by()
        ));

        if let Some(reason) = result.fallback_reason() {
            output.push_str(&format!(
                "\n{} {} Showing template predictions.\n",
                format!("Fallback ({}):", reason).yellow().bold(),
                reason.describe()
            ));
        }

        output.push_str(&Self::section_header("Predictions"));
        if result.predictions().is_empty() {
            output.push_str(&format!("{}\n", "No predictions.".dimmed()));
        } else {
            output.push_str(&format!(
                "{:>3}  {:>5}  {:<width$}  {}\n",
                "#",
                "Prob",
                "Sub-query",
                "Facet",
                width = TEXT_COLUMN
            ));
            for (index, prediction) in result.predictions().iter().enumerate() {
                output.push_str(&Self::row(index + 1, prediction));
            }
        }

        let summary = result.summary();
        output.push_str(&format!(
            "\n{} {} predictions, average {:.0}%, {} high / {} medium / {} low\n",
            "Summary:".cyan().bold(),
            summary.count,
            summary.average_probability * 100.0,
            summary.high,
            summary.medium,
            summary.low
        ));

        output.push_str(&Self::footer());
        output
    }

    fn row(rank: usize, prediction: &SubQueryPrediction) -> String {
        let probability = format!("{:>4}%", prediction.probability.percent());
        let text = truncate_str(&prediction.text, TEXT_COLUMN);
        format!(
            "{:>3}  {}  {:<width$}  {}\n",
            rank,
            Self::band_color(prediction.band(), probability),
            text,
            prediction.facet.as_deref().unwrap_or("-").dimmed(),
            width = TEXT_COLUMN
        )
    }

    fn band_color(band: ConfidenceBand, text: String) -> ColoredString {
        match band {
            ConfidenceBand::High => text.green().bold(),
            ConfidenceBand::Medium => text.yellow(),
            ConfidenceBand::Low => text.red(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            title.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(WIDTH).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &PredictionResult) -> String {
        ConsoleFormatter::format(result)
    }
}
