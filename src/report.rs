// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering for compliance analysis.
//!
//! Supports two output formats:
//! - Text: human-readable summary with per-dimension breakdown
//! - JSON: structured report for programmatic consumption

use crate::engine::ComplianceReport;
use crate::pipeline::{PipelineOutcome, PipelineResult};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render a compliance report in the requested format
pub fn render_report(report: &ComplianceReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_report_text(report),
        OutputFormat::Json => to_json(report),
    }
}

/// Render a pipeline result in the requested format
pub fn render_pipeline_result(result: &PipelineResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_pipeline_text(result),
        OutputFormat::Json => to_json(result),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize report: {}\"}}", e))
}

fn render_report_text(report: &ComplianceReport) -> String {
    let mut output = String::new();

    output.push_str("=== Claritybot Plain-Language Compliance Report ===\n\n");

    output.push_str(&format!("Overall score:  {:.1}/100\n", report.overall_score));
    output.push_str(&format!(
        "Compliant:      {}\n\n",
        if report.passes_compliance { "YES" } else { "NO" }
    ));

    output.push_str("--- Readability ---\n");
    output.push_str(&format!(
        "Grade level: {:.1} (target {:.1})  Reading ease: {:.1}\n",
        report.readability.flesch_kincaid_grade,
        report.readability.target_grade,
        report.readability.flesch_reading_ease
    ));
    output.push_str(&format!(
        "Words: {}  Sentences: {}  Complex words: {}\n\n",
        report.readability.word_count,
        report.readability.sentence_count,
        report.readability.complex_word_count
    ));

    output.push_str("--- Jargon ---\n");
    output.push_str(&format!(
        "Flagged terms: {}  Undefined acronyms: {}  Jargon ratio: {:.1}%\n",
        report.jargon.jargon_words.len(),
        report.jargon.undefined_acronyms.len(),
        report.jargon.jargon_ratio
    ));
    if !report.jargon.jargon_words.is_empty() {
        output.push_str(&format!("Terms: {}\n", report.jargon.jargon_words.join(", ")));
    }
    if !report.jargon.undefined_acronyms.is_empty() {
        output.push_str(&format!(
            "Acronyms: {}\n",
            report.jargon.undefined_acronyms.join(", ")
        ));
    }
    output.push('\n');

    output.push_str("--- Tone ---\n");
    output.push_str(&format!(
        "Polarity: {:.2}  Subjectivity: {:.2}  Passive voice: {}\n\n",
        report.tone.polarity, report.tone.subjectivity, report.tone.passive_voice_count
    ));

    if !report.issues.is_empty() {
        output.push_str(&format!("Issues ({}):\n", report.issues.len()));
        for issue in &report.issues {
            output.push_str(&format!("  - {}\n", issue));
        }
        output.push('\n');
    }

    if !report.recommendations.is_empty() {
        output.push_str(&format!("Recommendations ({}):\n", report.recommendations.len()));
        for rec in &report.recommendations {
            output.push_str(&format!("  - {}\n", rec));
        }
        output.push('\n');
    }

    if report.passes_compliance {
        output.push_str("RESULT: PASS\n");
    } else {
        output.push_str("RESULT: NON-COMPLIANT\n");
    }

    output
}

fn render_pipeline_text(result: &PipelineResult) -> String {
    let mut output = String::new();

    output.push_str("=== Claritybot Pipeline Result ===\n\n");
    output.push_str(&format!(
        "Outcome:   {}\n",
        match result.outcome {
            PipelineOutcome::Satisfied => "satisfied",
            PipelineOutcome::Exhausted => "exhausted",
        }
    ));
    output.push_str(&format!("Score:     {:.1}/100\n", result.compliance_score));
    output.push_str(&format!("Attempts:  {}\n", result.attempts));
    output.push_str(&format!(
        "Fixed:     {}\n\n",
        if result.was_fixed { "yes" } else { "no" }
    ));

    for (i, report) in result.history.iter().enumerate() {
        output.push_str(&format!(
            "Attempt {}: score {:.1}, {} issue(s)\n",
            i + 1,
            report.overall_score,
            report.issues.len()
        ));
    }
    output.push('\n');

    output.push_str("--- Final output ---\n");
    output.push_str(&result.final_output);
    output.push('\n');

    output
}
