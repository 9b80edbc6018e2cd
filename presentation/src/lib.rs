//! Presentation layer for fanout-predictor
//!
//! This crate renders [`PredictionResult`](fanout_domain::PredictionResult)s
//! for display and export.

pub mod output;

// Re-export commonly used types
pub use output::{
    OutputFormat, console::ConsoleFormatter, csv::CsvExporter, formatter::OutputFormatter,
    json::JsonFormatter,
};
