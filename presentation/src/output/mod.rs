//! Output rendering

pub mod console;
pub mod csv;
pub mod formatter;
pub mod json;

use formatter::OutputFormatter;
use fanout_domain::PredictionResult;
use serde::{Deserialize, Serialize};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored table for terminals
    #[default]
    Table,
    /// CSV export rows
    Csv,
    /// Pretty-printed JSON of the whole result
    Json,
}

impl OutputFormat {
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Table => Box::new(console::ConsoleFormatter),
            OutputFormat::Csv => Box::new(csv::CsvExporter),
            OutputFormat::Json => Box::new(json::JsonFormatter),
        }
    }

    pub fn render(self, result: &PredictionResult) -> String {
        self.formatter().format(result)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "console" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected table, csv or json)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("console".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
