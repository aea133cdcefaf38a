// SPDX-License-Identifier: PMPL-1.0-or-later
//! Plain-language analyzers.
//!
//! Each analyzer module scores one dimension of a text and produces a
//! self-contained result: numeric metrics, a pass/fail flag, and
//! human-readable recommendations.
//!
//! - **Readability**: grade-level and ease formulas from word, sentence,
//!   and syllable counts
//! - **Jargon**: rule-table term matching and undefined-acronym detection
//! - **Tone**: sentiment neutrality, subjectivity, and passive voice
//!
//! Analyzers are pure functions of their input text and the shared
//! [`crate::rules::RuleSet`]; results carry no references to one another.

pub mod jargon;
pub mod readability;
pub mod tone;

pub use jargon::{JargonDetector, JargonResult};
pub use readability::{ReadabilityAnalyzer, ReadabilityResult};
pub use tone::{ToneAnalyzer, ToneResult};

use crate::nlp::tokenize;

/// Surface counts derived from a text, computed fresh per analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    /// Words with three or more syllables
    pub complex_word_count: usize,
    /// Mean characters per word
    pub avg_word_length: f64,
    /// Mean words per sentence
    pub avg_sentence_length: f64,
}

impl TextMetrics {
    /// Compute counts for a text. All-zero metrics for empty input.
    pub fn compute(text: &str) -> Self {
        let words = tokenize::words(text);
        let sentence_count = tokenize::sentences(text).len();

        let word_count = words.len();
        let mut syllable_count = 0;
        let mut complex_word_count = 0;
        let mut char_count = 0;

        for word in &words {
            let syllables = tokenize::syllables(&word.text);
            syllable_count += syllables;
            if syllables >= 3 {
                complex_word_count += 1;
            }
            char_count += word.text.chars().count();
        }

        let avg_word_length = if word_count > 0 {
            char_count as f64 / word_count as f64
        } else {
            0.0
        };
        let avg_sentence_length = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };

        Self {
            word_count,
            sentence_count,
            syllable_count,
            complex_word_count,
            avg_word_length,
            avg_sentence_length,
        }
    }

    /// Percentage of words with three or more syllables
    pub fn complex_word_ratio(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        100.0 * self.complex_word_count as f64 / self.word_count as f64
    }

    /// True when the text has nothing to measure
    pub fn is_degenerate(&self) -> bool {
        self.word_count == 0 || self.sentence_count == 0
    }
}

/// Round to one decimal place, the precision used across reports.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_simple_text() {
        let m = TextMetrics::compute("The cat sat on the mat. The dog ran.");
        assert_eq!(m.word_count, 9);
        assert_eq!(m.sentence_count, 2);
        assert_eq!(m.complex_word_count, 0);
        assert!((m.avg_sentence_length - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_empty_text() {
        let m = TextMetrics::compute("");
        assert!(m.is_degenerate());
        assert_eq!(m.avg_word_length, 0.0);
        assert_eq!(m.complex_word_ratio(), 0.0);
    }

    #[test]
    fn test_metrics_whitespace_only() {
        let m = TextMetrics::compute("   \n\t  ");
        assert!(m.is_degenerate());
    }

    #[test]
    fn test_complex_word_ratio() {
        let m = TextMetrics::compute("Utilize the interface.");
        assert_eq!(m.word_count, 3);
        assert_eq!(m.complex_word_count, 2);
        assert!((m.complex_word_ratio() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(87.654), 87.7);
        assert_eq!(round1(100.0), 100.0);
        assert_eq!(round1(0.04), 0.0);
    }
}
