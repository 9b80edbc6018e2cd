//! CSV export
//!
//! One row per prediction in ranked order under the header
//! `sub_query,probability,reasoning,rank`. Fields are quoted per RFC 4180.

use crate::output::formatter::OutputFormatter;
use fanout_domain::{PredictionResult, SubQueryPrediction};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const HEADER: [&str; 4] = ["sub_query", "probability", "reasoning", "rank"];

/// Writes prediction results as CSV
pub struct CsvExporter;

impl CsvExporter {
    /// Render the CSV document as a string
    pub fn to_csv(predictions: &[SubQueryPrediction]) -> String {
        let mut out = String::new();
        for line in lines(predictions) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Stream the CSV document into `writer`
    pub fn write<W: Write>(predictions: &[SubQueryPrediction], mut writer: W) -> io::Result<()> {
        for line in lines(predictions) {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }

    /// Write the result into `dir` under [`file_name`](Self::file_name)
    pub fn export_to_dir(result: &PredictionResult, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(Self::file_name(result.query().canonical()));
        let file = std::fs::File::create(&path)?;
        Self::write(result.predictions(), io::BufWriter::new(file))?;
        Ok(path)
    }

    /// Suggested file name, e.g. `fanout_analysis_best_smartphones.csv`
    pub fn file_name(query: &str) -> String {
        let stem: String = query
            .trim()
            .chars()
            .map(|c| if is_reserved(c) { '_' } else { c })
            .collect();
        format!("fanout_analysis_{}.csv", stem)
    }
}

impl OutputFormatter for CsvExporter {
    fn format(&self, result: &PredictionResult) -> String {
        Self::to_csv(result.predictions())
    }
}

/// Header and data lines, without terminators
fn lines(predictions: &[SubQueryPrediction]) -> impl Iterator<Item = String> + '_ {
    let rows = predictions.iter().enumerate().map(|(index, prediction)| {
        [
            escape(&prediction.text),
            format!("{:.2}", prediction.probability.value()),
            escape(prediction.rationale.as_deref().unwrap_or("")),
            (index + 1).to_string(),
        ]
        .join(",")
    });
    std::iter::once(HEADER.join(",")).chain(rows)
}

fn is_reserved(c: char) -> bool {
    c.is_whitespace() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}

/// Quote a field when it contains a delimiter, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fanout_domain::{Language, Probability, ProviderConfig, ProviderKind, QueryNormalizer};

    fn pred(text: &str, p: f64) -> SubQueryPrediction {
        SubQueryPrediction::new(text, Probability::try_new(p).unwrap())
    }

    #[test]
    fn test_rows_in_ranked_order() {
        let predictions = vec![
            pred("best smartphones 2024 reviews", 0.87).with_rationale("Fixed template prior"),
            pred("best smartphones 2024 comparison", 0.755),
        ];

        let csv = CsvExporter::to_csv(&predictions);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "sub_query,probability,reasoning,rank");
        assert_eq!(
            lines[1],
            "best smartphones 2024 reviews,0.87,Fixed template prior,1"
        );
        assert!(lines[2].starts_with("best smartphones 2024 comparison,0.7"));
        assert!(lines[2].ends_with(",,2"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_quoting() {
        let predictions =
            vec![pred("phones, cheap", 0.5).with_rationale("the \"budget\" angle\nsecond line")];

        let csv = CsvExporter::to_csv(&predictions);

        assert!(csv.contains("\"phones, cheap\",0.50,"));
        assert!(csv.contains("\"the \"\"budget\"\" angle\nsecond line\",1"));
    }

    #[test]
    fn test_write_matches_to_csv() {
        let predictions = vec![
            pred("phones, cheap", 0.5).with_rationale("budget"),
            pred("phone cases", 0.25),
        ];

        let mut out = Vec::new();
        CsvExporter::write(&predictions, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), CsvExporter::to_csv(&predictions));
    }

    #[test]
    fn test_empty_result_has_header_only() {
        assert_eq!(CsvExporter::to_csv(&[]), "sub_query,probability,reasoning,rank\n");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            CsvExporter::file_name("best smartphones 2024"),
            "fanout_analysis_best_smartphones_2024.csv"
        );
        assert_eq!(
            CsvExporter::file_name("a/b: c"),
            "fanout_analysis_a_b__c.csv"
        );
    }

    #[test]
    fn test_export_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let query = QueryNormalizer::default()
            .normalize("mejores móviles", Some(Language::Spanish))
            .unwrap();
        let result = fanout_domain::PredictionResult::new(
            query,
            ProviderConfig::new(ProviderKind::Template, Language::Spanish).snapshot(None),
            ProviderKind::Template,
            vec![pred("mejores móviles reseñas", 0.87)],
        );

        let path = CsvExporter::export_to_dir(&result, dir.path()).unwrap();

        assert!(path.ends_with("fanout_analysis_mejores_móviles.csv"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("mejores móviles reseñas,0.87,,1"));
    }
}
