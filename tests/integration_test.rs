// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for claritybot analysis

use claritybot::engine::ComplianceEngine;
use claritybot::inject::AccessibilityInjector;
use claritybot::report::{render_report, OutputFormat};
use claritybot::rules::{ContentType, RuleSet};
use claritybot::scanner;
use std::path::Path;
use std::sync::Arc;

fn engine() -> ComplianceEngine {
    ComplianceEngine::new(Arc::new(RuleSet::defaults().expect("defaults load")))
}

#[test]
fn test_plain_fixture_passes() {
    let report = scanner::scan_file(&engine(), Path::new("tests/fixtures/plain.txt"), 8.0)
        .expect("scan should succeed");

    assert!(
        report.passes_compliance,
        "plain fixture should pass, got issues: {:?}",
        report.issues
    );
    assert!(report.overall_score > 90.0);
}

#[test]
fn test_dense_fixture_fails() {
    let report = scanner::scan_file(&engine(), Path::new("tests/fixtures/dense.txt"), 8.0)
        .expect("scan should succeed");

    assert!(!report.passes_compliance);
    assert!(report.overall_score < 70.0);
    assert!(!report.issues.is_empty());
    assert!(!report.recommendations.is_empty());
    assert!(report.tone.passive_voice_count >= 2);
    assert!(report
        .jargon
        .undefined_acronyms
        .iter()
        .any(|a| a == "API" || a == "CDN" || a == "SLA"));
}

#[test]
fn test_scan_fixtures_directory() {
    let reports = scanner::scan_directory(&engine(), Path::new("tests/fixtures"), 8.0)
        .expect("scan should succeed");

    assert_eq!(reports.len(), 2);
    let failing = reports
        .iter()
        .filter(|r| !r.report.passes_compliance)
        .count();
    assert_eq!(failing, 1);
}

#[test]
fn test_score_bounds_across_inputs() {
    let engine = engine();
    for text in [
        "",
        "   ",
        "One.",
        "Utilize the API to facilitate data transmission and implement visualization.",
        "The interdepartmental organizational infrastructure methodology was operationalized \
         by the aforementioned stakeholders, and this absolutely terrible outcome was \
         promulgated throughout the comprehensive administrative documentation.",
    ] {
        let report = engine.analyze(text, 8.0);
        assert!(
            (0.0..=100.0).contains(&report.overall_score),
            "out of bounds for {text:?}"
        );
    }
}

#[test]
fn test_empty_string_is_compliant() {
    let report = engine().analyze("", 8.0);
    assert_eq!(report.overall_score, 100.0);
    assert!(report.passes_compliance);
}

#[test]
fn test_reports_are_byte_identical() {
    let engine = engine();
    let text = std::fs::read_to_string("tests/fixtures/dense.txt").unwrap();
    let a = serde_json::to_string(&engine.analyze(&text, 8.0)).unwrap();
    let b = serde_json::to_string(&engine.analyze(&text, 8.0)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_jargon_scenario() {
    let report = engine().analyze(
        "Utilize the API to facilitate data transmission and implement visualization.",
        8.0,
    );

    for term in ["Utilize", "facilitate", "implement"] {
        assert!(
            report.jargon.jargon_words.contains(&term.to_string()),
            "missing jargon term {term}, got {:?}",
            report.jargon.jargon_words
        );
    }
    assert!(report.jargon.undefined_acronyms.contains(&"API".to_string()));
    assert!(report.readability.flesch_kincaid_grade > 8.0);
    assert!(!report.passes_compliance);
}

#[test]
fn test_injector_scenario() {
    let injector = AccessibilityInjector::new(Arc::new(RuleSet::defaults().unwrap()));
    let out = injector.inject("Describe the chart.", ContentType::Images);
    assert!(out.contains("Describe the chart."));
    assert!(out.contains("alt text"));
}

#[test]
fn test_monotonicity_in_target_grade() {
    let engine = engine();
    let text = std::fs::read_to_string("tests/fixtures/dense.txt").unwrap();
    let mut last = -1.0;
    for grade in [2.0, 5.0, 8.0, 11.0, 14.0] {
        let score = engine.analyze(&text, grade).overall_score;
        assert!(score >= last, "score fell from {last} to {score} at grade {grade}");
        last = score;
    }
}

#[test]
fn test_text_and_json_formats() {
    let report = engine().analyze("Utilize the API.", 8.0);

    let text = render_report(&report, OutputFormat::Text);
    assert!(text.contains("Claritybot"));
    assert!(text.contains("--- Jargon ---"));

    let json = render_report(&report, OutputFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert!(parsed["overallScore"].is_number());
    assert!(parsed["jargon"]["jargonWords"].is_array());
}
