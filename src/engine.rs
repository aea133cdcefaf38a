// SPDX-License-Identifier: PMPL-1.0-or-later
//! Compliance scoring engine.
//!
//! Runs the three analyzers over the same input and folds their results
//! into one 0-100 score through a fixed linear penalty model. The analyzer
//! results carry no dependencies on one another, so their order never
//! affects the score.

use crate::analyzers::{
    round1, JargonDetector, JargonResult, ReadabilityAnalyzer, ReadabilityResult, ToneAnalyzer,
    ToneResult,
};
use crate::nlp::{LexiconNlp, Linguistic};
use crate::rules::RuleSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Tone label used when scoring; echoed in tone recommendations.
const DEFAULT_TARGET_TONE: &str = "professional";

/// Aggregate compliance verdict for one text.
///
/// Serializes flat enough for machine consumption; identical input always
/// produces an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Overall score in [0, 100], one decimal place
    pub overall_score: f64,
    /// Conjunction of the three analyzers' pass flags
    pub passes_compliance: bool,
    /// One line per failed sub-criterion, in readability/jargon/tone order
    pub issues: Vec<String>,
    /// All analyzer recommendations, deduplicated, first occurrence wins
    pub recommendations: Vec<String>,
    pub readability: ReadabilityResult,
    pub jargon: JargonResult,
    pub tone: ToneResult,
}

/// Aggregates readability, jargon, and tone analysis into one score.
///
/// Penalty model, starting from 100:
/// - readability: `min(40, max(0, grade - target) * 10)`
/// - jargon ratio: `min(30, ratio)`
/// - tone: `10` if not neutral, plus `5` if subjective
/// - passive voice: `min(15, count * 3)`
///
/// Undefined acronyms gate `passes_compliance` through the jargon flag but
/// subtract nothing from the numeric score: the jargon ratio already
/// reflects flagged-token density, and a separate acronym penalty would
/// double-count terms present in the rule tables.
pub struct ComplianceEngine {
    readability: ReadabilityAnalyzer,
    jargon: JargonDetector,
    tone: ToneAnalyzer,
}

impl ComplianceEngine {
    /// Engine with the built-in linguistic backend.
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self::with_nlp(rules, Arc::new(LexiconNlp))
    }

    /// Engine with a caller-supplied linguistic backend.
    pub fn with_nlp(rules: Arc<RuleSet>, nlp: Arc<dyn Linguistic>) -> Self {
        Self {
            readability: ReadabilityAnalyzer::new(),
            jargon: JargonDetector::new(rules, nlp.clone()),
            tone: ToneAnalyzer::new(nlp),
        }
    }

    /// Score a text against a target grade level.
    ///
    /// Never fails: empty or whitespace-only input produces the degenerate
    /// passing report (score 100, no penalties).
    pub fn analyze(&self, text: &str, target_grade: f64) -> ComplianceReport {
        let readability = self.readability.score(text, target_grade);
        let jargon = self.jargon.detect(text);
        let tone = self.tone.analyze(text, DEFAULT_TARGET_TONE);

        let readability_penalty =
            ((readability.flesch_kincaid_grade - target_grade).max(0.0) * 10.0).min(40.0);
        let jargon_penalty = jargon.jargon_ratio.min(30.0);
        let tone_penalty = if tone.is_neutral { 0.0 } else { 10.0 }
            + if tone.is_subjective { 5.0 } else { 0.0 };
        let passive_penalty = (tone.passive_voice_count as f64 * 3.0).min(15.0);

        let total = readability_penalty + jargon_penalty + tone_penalty + passive_penalty;
        let overall_score = round1(100.0 - total).max(0.0);

        let passes_compliance =
            readability.meets_target && !jargon.has_issues && tone.meets_target;

        let issues = build_issues(&readability, &jargon, &tone);
        let recommendations = dedup_in_order(
            readability
                .recommendations
                .iter()
                .chain(jargon.recommendations.iter())
                .chain(tone.recommendations.iter()),
        );

        debug!(
            score = overall_score,
            passes = passes_compliance,
            readability_penalty,
            jargon_penalty,
            tone_penalty,
            passive_penalty,
            "Compliance analysis complete"
        );

        ComplianceReport {
            overall_score,
            passes_compliance,
            issues,
            recommendations,
            readability,
            jargon,
            tone,
        }
    }
}

/// One issue line per failed sub-criterion, fixed order.
fn build_issues(
    readability: &ReadabilityResult,
    jargon: &JargonResult,
    tone: &ToneResult,
) -> Vec<String> {
    let mut issues = Vec::new();

    if !readability.meets_target {
        issues.push(format!(
            "Reading level (grade {:.1}) exceeds the target of grade {:.1}",
            readability.flesch_kincaid_grade, readability.target_grade
        ));
    }
    if jargon.has_issues {
        issues.push(format!(
            "Jargon problems: {} flagged term(s), {} undefined acronym(s), {:.1}% complex words",
            jargon.jargon_words.len(),
            jargon.undefined_acronyms.len(),
            jargon.complex_word_ratio
        ));
    }
    if !tone.meets_target {
        issues.push(format!(
            "Tone is not neutral (polarity {:.2}) or reads as subjective (subjectivity {:.2})",
            tone.polarity, tone.subjectivity
        ));
    }

    issues
}

/// Deduplicate by exact string match, preserving first-occurrence order.
fn dedup_in_order<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.as_str()) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ComplianceEngine {
        ComplianceEngine::new(Arc::new(RuleSet::defaults().unwrap()))
    }

    const DENSE: &str =
        "Utilize the API to facilitate data transmission and implement visualization.";

    #[test]
    fn test_score_bounds() {
        let engine = engine();
        for text in [
            "",
            "Short and sweet.",
            DENSE,
            "The system was implemented. It was utilized. It was leveraged. It was optimized. \
             This is absolutely the worst, most terrible methodology ever promulgated.",
        ] {
            let report = engine.analyze(text, 8.0);
            assert!(
                (0.0..=100.0).contains(&report.overall_score),
                "score out of range for {text:?}: {}",
                report.overall_score
            );
        }
    }

    #[test]
    fn test_empty_text_scores_100_and_passes() {
        let report = engine().analyze("", 8.0);
        assert_eq!(report.overall_score, 100.0);
        assert!(report.passes_compliance);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_whitespace_only_scores_100() {
        let report = engine().analyze("  \n\t ", 8.0);
        assert_eq!(report.overall_score, 100.0);
        assert!(report.passes_compliance);
    }

    #[test]
    fn test_passes_iff_all_three_pass() {
        let report = engine().analyze(DENSE, 8.0);
        assert!(!report.passes_compliance);
        assert_eq!(
            report.passes_compliance,
            report.readability.meets_target
                && !report.jargon.has_issues
                && report.tone.meets_target
        );

        let clean = engine().analyze("The cat sat on the mat. The dog ran home.", 8.0);
        assert_eq!(
            clean.passes_compliance,
            clean.readability.meets_target
                && !clean.jargon.has_issues
                && clean.tone.meets_target
        );
    }

    #[test]
    fn test_idempotence() {
        let engine = engine();
        let a = engine.analyze(DENSE, 8.0);
        let b = engine.analyze(DENSE, 8.0);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_target_grade_monotonicity() {
        let engine = engine();
        let mut last = -1.0;
        for target in [4.0, 6.0, 8.0, 10.0, 12.0, 16.0] {
            let score = engine.analyze(DENSE, target).overall_score;
            assert!(
                score >= last,
                "score decreased when target rose to {target}: {score} < {last}"
            );
            last = score;
        }
    }

    #[test]
    fn test_issue_order_is_fixed() {
        let text = "The implementation was utilized by the organizational infrastructure. \
                    This is absolutely terrible and the worst outcome imaginable for the API.";
        let report = engine().analyze(text, 4.0);
        assert!(report.issues.len() >= 2);
        assert!(report.issues[0].contains("Reading level"));
    }

    #[test]
    fn test_recommendations_deduplicated() {
        let report = engine().analyze(DENSE, 4.0);
        let mut seen = std::collections::HashSet::new();
        for rec in &report.recommendations {
            assert!(seen.insert(rec.clone()), "duplicate recommendation: {rec}");
        }
    }

    #[test]
    fn test_dense_scenario_fails() {
        let report = engine().analyze(DENSE, 8.0);
        assert!(report.readability.flesch_kincaid_grade > 8.0);
        assert!(report.jargon.jargon_words.contains(&"Utilize".to_string()));
        assert!(report
            .jargon
            .undefined_acronyms
            .contains(&"API".to_string()));
        assert!(!report.passes_compliance);
        assert!(report.overall_score < 70.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let report = engine().analyze("Plain words.", 8.0);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("overallScore").is_some());
        assert!(json.get("passesCompliance").is_some());
        assert!(json.get("issues").is_some());
        assert!(json.get("recommendations").is_some());
    }
}
