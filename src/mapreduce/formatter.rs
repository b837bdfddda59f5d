//! Output formatting for MapReduce results
//!
//! Renders a [`GlobalReport`], or a full [`MapReduceOutcome`] with run
//! metadata, as text, JSON or Markdown.

use super::executor::MapReduceOutcome;
use super::types::GlobalReport;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Format type for output presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FormatType {
    /// Plain text format
    Text,
    /// JSON format
    Json,
    /// Pretty-printed JSON
    #[serde(alias = "json_pretty")]
    #[value(alias = "json_pretty")]
    JsonPretty,
    /// Markdown format
    #[serde(alias = "md")]
    #[value(alias = "md")]
    Markdown,
}

impl FromStr for FormatType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-pretty" | "json_pretty" => Ok(Self::JsonPretty),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(format!(
                "unknown format '{}' (expected text, json, json-pretty or markdown)",
                other
            )),
        }
    }
}

/// Output formatter for MapReduce results
pub struct OutputFormatter {
    format_type: FormatType,
}

impl OutputFormatter {
    /// Create a new formatter with the specified format type
    pub fn new(format_type: FormatType) -> Self {
        Self { format_type }
    }

    /// Format a bare report
    pub fn format_report(&self, report: &GlobalReport) -> Result<String> {
        let mut output = String::new();
        match self.format_type {
            FormatType::Text => write_report_text(&mut output, report)?,
            FormatType::Json => write_json(&mut output, report, false)?,
            FormatType::JsonPretty => write_json(&mut output, report, true)?,
            FormatType::Markdown => write_report_markdown(&mut output, report)?,
        }
        Ok(output)
    }

    /// Format a report together with the metadata of the run that produced it
    pub fn format_outcome(&self, outcome: &MapReduceOutcome) -> Result<String> {
        let mut output = String::new();
        match self.format_type {
            FormatType::Text => write_outcome_text(&mut output, outcome)?,
            FormatType::Json => write_json(&mut output, outcome, false)?,
            FormatType::JsonPretty => write_json(&mut output, outcome, true)?,
            FormatType::Markdown => write_outcome_markdown(&mut output, outcome)?,
        }
        Ok(output)
    }
}

fn write_json<T: Serialize>(output: &mut String, value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(output, "{}", rendered)?;
    Ok(())
}

fn write_report_text(output: &mut String, report: &GlobalReport) -> fmt::Result {
    writeln!(output, "=== MapReduce Results ===")?;
    writeln!(output, "Total documents: {}", report.total_documents)?;
    writeln!(output, "Total characters: {}", report.total_characters)?;
    writeln!(output, "Unique words: {}", report.total_unique_words)?;
    writeln!(output, "Total words: {}", report.total_words)?;
    writeln!(
        output,
        "Most common word: '{}' ({} times)",
        report.most_common_word.word, report.most_common_word.count
    )?;
    writeln!(
        output,
        "Least common word: '{}' ({} times)",
        report.least_common_word.word, report.least_common_word.count
    )?;

    if !report.word_distribution.is_empty() {
        writeln!(output)?;
        writeln!(output, "Top {} words:", report.word_distribution.len())?;
        for (word, count) in &report.word_distribution {
            writeln!(output, "  {}: {}", word, count)?;
        }
    }
    Ok(())
}

fn write_outcome_text(output: &mut String, outcome: &MapReduceOutcome) -> fmt::Result {
    writeln!(output, "Job: {}", outcome.job_id)?;
    writeln!(
        output,
        "Chunks: {} {:?}",
        outcome.chunk_sizes.len(),
        outcome.chunk_sizes
    )?;
    writeln!(output, "Elapsed: {}ms", outcome.elapsed_ms)?;
    writeln!(output)?;
    write_report_text(output, &outcome.report)
}

fn write_report_markdown(output: &mut String, report: &GlobalReport) -> fmt::Result {
    writeln!(output, "## MapReduce Results\n")?;
    writeln!(output, "**Summary:**")?;
    writeln!(output, "- Documents: {}", report.total_documents)?;
    writeln!(output, "- Characters: {}", report.total_characters)?;
    writeln!(output, "- Unique words: {}", report.total_unique_words)?;
    writeln!(output, "- Total words: {}", report.total_words)?;
    writeln!(
        output,
        "- Most common: `{}` ({})",
        report.most_common_word.word, report.most_common_word.count
    )?;
    writeln!(
        output,
        "- Least common: `{}` ({})\n",
        report.least_common_word.word, report.least_common_word.count
    )?;

    writeln!(output, "| Rank | Word | Count |")?;
    writeln!(output, "|------|------|-------|")?;
    for (rank, (word, count)) in report.word_distribution.iter().enumerate() {
        writeln!(output, "| {} | {} | {} |", rank + 1, word, count)?;
    }
    Ok(())
}

fn write_outcome_markdown(output: &mut String, outcome: &MapReduceOutcome) -> fmt::Result {
    write_report_markdown(output, &outcome.report)?;
    writeln!(output)?;
    writeln!(
        output,
        "_Job `{}`: {} chunks, {}ms_",
        outcome.job_id,
        outcome.chunk_sizes.len(),
        outcome.elapsed_ms
    )
}
