// SPDX-License-Identifier: PMPL-1.0-or-later
//! Readability scoring from standard published formulas.
//!
//! All metrics are pure functions of the word, sentence, syllable, and
//! complex-word counts: Flesch-Kincaid Grade Level, Flesch Reading Ease,
//! Gunning Fog, and the SMOG index.

use super::{round1, TextMetrics};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default target: 8th grade, the common plain-language ceiling.
pub const DEFAULT_TARGET_GRADE: f64 = 8.0;

/// Readability metrics for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityResult {
    /// Flesch-Kincaid Grade Level, clamped to >= 0
    pub flesch_kincaid_grade: f64,
    /// Flesch Reading Ease (higher is easier)
    pub flesch_reading_ease: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub complex_word_count: usize,
    /// The grade ceiling this text was scored against
    pub target_grade: f64,
    /// Whether the grade level is at or below the target
    pub meets_target: bool,
    pub recommendations: Vec<String>,
}

impl ReadabilityResult {
    /// Defined result for text with nothing to measure: grade 0, passing.
    fn degenerate(target_grade: f64) -> Self {
        Self {
            flesch_kincaid_grade: 0.0,
            flesch_reading_ease: 100.0,
            gunning_fog: 0.0,
            smog_index: 0.0,
            avg_word_length: 0.0,
            avg_sentence_length: 0.0,
            word_count: 0,
            sentence_count: 0,
            syllable_count: 0,
            complex_word_count: 0,
            target_grade,
            meets_target: true,
            recommendations: Vec::new(),
        }
    }
}

/// Computes grade-level and ease metrics from sentence/word/syllable counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score a text against a target grade level.
    ///
    /// Never divides by zero: empty or sentence-free input yields the
    /// degenerate passing result.
    pub fn score(&self, text: &str, target_grade: f64) -> ReadabilityResult {
        let metrics = TextMetrics::compute(text);
        if metrics.is_degenerate() {
            return ReadabilityResult::degenerate(target_grade);
        }

        let words = metrics.word_count as f64;
        let sentences = metrics.sentence_count as f64;
        let syllables = metrics.syllable_count as f64;
        let complex = metrics.complex_word_count as f64;

        let grade = (0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59).max(0.0);
        let ease = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words);
        let fog = 0.4 * ((words / sentences) + 100.0 * (complex / words));
        let smog = 1.0430 * (complex * 30.0 / sentences).sqrt() + 3.1291;

        let meets_target = grade <= target_grade;
        let recommendations = self.recommendations(grade, target_grade, &metrics);

        debug!(
            grade = round1(grade),
            ease = round1(ease),
            words = metrics.word_count,
            sentences = metrics.sentence_count,
            "Readability scored"
        );

        ReadabilityResult {
            flesch_kincaid_grade: round1(grade),
            flesch_reading_ease: round1(ease),
            gunning_fog: round1(fog),
            smog_index: round1(smog),
            avg_word_length: round1(metrics.avg_word_length),
            avg_sentence_length: round1(metrics.avg_sentence_length),
            word_count: metrics.word_count,
            sentence_count: metrics.sentence_count,
            syllable_count: metrics.syllable_count,
            complex_word_count: metrics.complex_word_count,
            target_grade,
            meets_target,
            recommendations,
        }
    }

    /// Suggestions proportional to how far the grade overshoots the target.
    fn recommendations(&self, grade: f64, target: f64, metrics: &TextMetrics) -> Vec<String> {
        let excess = grade - target;
        let mut recs = Vec::new();

        if excess <= 0.0 {
            return recs;
        }

        recs.push(format!(
            "Shorten sentences: average length is {:.0} words, aim for 15-20",
            metrics.avg_sentence_length
        ));

        if excess > 2.0 {
            recs.push("Replace multi-syllable words with shorter everyday words".to_string());
        }

        if excess > 4.0 {
            recs.push("Break dense passages into lists or short paragraphs".to_string());
        }

        recs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_text_low_grade() {
        let result = ReadabilityAnalyzer::new()
            .score("The cat sat on the mat. The dog ran fast. I am happy.", 8.0);
        assert!(result.flesch_kincaid_grade < 6.0);
        assert!(result.meets_target);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_dense_text_high_grade() {
        let text = "Utilize the API to facilitate data transmission and implement visualization.";
        let result = ReadabilityAnalyzer::new().score(text, 8.0);
        assert!(result.flesch_kincaid_grade > 8.0);
        assert!(!result.meets_target);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_empty_text_degenerate() {
        let result = ReadabilityAnalyzer::new().score("", 8.0);
        assert_eq!(result.flesch_kincaid_grade, 0.0);
        assert!(result.meets_target);
        assert_eq!(result.word_count, 0);
    }

    #[test]
    fn test_whitespace_only_degenerate() {
        let result = ReadabilityAnalyzer::new().score("   \n  ", 8.0);
        assert_eq!(result.flesch_kincaid_grade, 0.0);
        assert!(result.meets_target);
    }

    #[test]
    fn test_grade_clamped_nonnegative() {
        let result = ReadabilityAnalyzer::new().score("Go. Sit. Run. Eat.", 8.0);
        assert!(result.flesch_kincaid_grade >= 0.0);
    }

    #[test]
    fn test_recommendations_scale_with_excess() {
        let analyzer = ReadabilityAnalyzer::new();
        let dense = "The organizational implementation necessitates comprehensive administrative \
                     coordination throughout interdepartmental communication infrastructure \
                     methodologies and sophisticated technological standardization.";
        let strict = analyzer.score(dense, 1.0);
        let lenient = analyzer.score(dense, 18.0);
        assert!(strict.recommendations.len() >= lenient.recommendations.len());
        assert!(strict.recommendations.len() >= 2);
    }

    #[test]
    fn test_raising_target_never_fails_a_passing_text() {
        let analyzer = ReadabilityAnalyzer::new();
        let text = "The report is short. It is easy to read.";
        let at_8 = analyzer.score(text, 8.0);
        let at_12 = analyzer.score(text, 12.0);
        assert!(at_8.meets_target);
        assert!(at_12.meets_target);
        assert_eq!(at_8.flesch_kincaid_grade, at_12.flesch_kincaid_grade);
    }
}
