//! Data command implementation

use std::process::ExitCode;

use crate::cli::logging::{log, LogLevel};
use crate::data::{analyze, load_jsonl, CorpusStats};
use crate::error::Result;

/// Format corpus statistics as a terminal report.
#[must_use]
pub fn format_stats(stats: &CorpusStats) -> String {
    let mut lines = vec![format!("Total examples: {}", stats.total_examples)];

    if !stats.families.is_empty() {
        lines.push(String::new());
        lines.push("Families:".to_string());
        for (family, count) in &stats.families {
            lines.push(format!("  {family}: {count}"));
        }
    }

    if !stats.complexity.is_empty() {
        lines.push(String::new());
        lines.push("Complexity:".to_string());
        for (level, count) in &stats.complexity {
            lines.push(format!("  {level}: {count}"));
        }
    }

    if let Some(text) = stats.text_length {
        lines.push(String::new());
        lines.push(format!(
            "Text length: min {} / max {} / mean {:.1}",
            text.min, text.max, text.mean
        ));
    }
    if let Some(ir) = stats.ir_length {
        lines.push(format!(
            "IR length:   min {} / max {} / mean {:.1}",
            ir.min, ir.max, ir.mean
        ));
    }

    lines.join("\n")
}

/// Run `tallar data`.
pub fn run_data(args: &crate::cli::args::DataArgs, log_level: LogLevel) -> Result<ExitCode> {
    let samples = load_jsonl(&args.path)?;
    let stats = analyze(&samples);

    log(log_level, LogLevel::Normal, &format_stats(&stats));

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DesignSample;

    #[test]
    fn test_format_stats_sections() {
        let samples = vec![
            DesignSample {
                text: "a cube".into(),
                ir: "C 1 1 1".into(),
                family: Some("box".into()),
                complexity: Some(1),
            },
            DesignSample {
                text: "a sphere".into(),
                ir: "S 0.5".into(),
                family: None,
                complexity: None,
            },
        ];
        let report = format_stats(&analyze(&samples));

        assert!(report.contains("Total examples: 2"));
        assert!(report.contains("  box: 1"));
        assert!(report.contains("  unknown: 1"));
        assert!(report.contains("Text length:"));
        assert!(report.contains("IR length:"));
    }

    #[test]
    fn test_format_stats_empty() {
        let report = format_stats(&analyze(&[]));
        assert_eq!(report, "Total examples: 0");
    }
}
