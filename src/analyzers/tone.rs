// SPDX-License-Identifier: PMPL-1.0-or-later
//! Tone analysis: sentiment neutrality, subjectivity, passive voice, and a
//! formality heuristic.

use super::TextMetrics;
use crate::nlp::tagger;
use crate::nlp::{Clause, Linguistic};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Polarity window considered neutral
const NEUTRAL_BAND: f64 = 0.3;
/// Subjectivity above this flags opinionated writing
const SUBJECTIVITY_LIMIT: f64 = 0.5;
/// Highest passive-voice count that passes without a recommendation
const PASSIVE_THRESHOLD: usize = 3;

/// Tone findings for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneResult {
    /// Sentiment polarity in [-1, 1]
    pub polarity: f64,
    /// Sentiment subjectivity in [0, 1]
    pub subjectivity: f64,
    pub is_neutral: bool,
    pub is_subjective: bool,
    /// Clauses matching the be-auxiliary + past-participle pattern
    pub passive_voice_count: usize,
    /// Normalized blend of word length and complex-word ratio, in [0, 1]
    pub formality_score: f64,
    /// The tone the text was scored against, echoed for reporting
    pub target_tone: String,
    /// Neutral and not subjective
    pub meets_target: bool,
    pub recommendations: Vec<String>,
}

/// Computes sentiment, subjectivity, and passive-voice counts.
pub struct ToneAnalyzer {
    nlp: Arc<dyn Linguistic>,
}

impl ToneAnalyzer {
    pub fn new(nlp: Arc<dyn Linguistic>) -> Self {
        Self { nlp }
    }

    /// Analyze the tone of a text against a target tone label.
    pub fn analyze(&self, text: &str, target_tone: &str) -> ToneResult {
        let sentiment = self.nlp.sentiment(text);
        let clauses = self.nlp.dependency_parse(text);
        let passive_voice_count = clauses.iter().filter(|c| is_passive(c)).count();

        let metrics = TextMetrics::compute(text);
        let formality_score = formality(&metrics);

        let is_neutral = sentiment.polarity.abs() <= NEUTRAL_BAND;
        let is_subjective = sentiment.subjectivity > SUBJECTIVITY_LIMIT;
        let meets_target = is_neutral && !is_subjective;

        let mut recommendations = Vec::new();
        if !is_neutral {
            let lean = if sentiment.polarity > 0.0 { "positive" } else { "negative" };
            recommendations.push(format!(
                "Tone leans {lean}; rewrite emotional wording to keep a {target_tone} tone"
            ));
        }
        if is_subjective {
            recommendations
                .push("Replace opinion words with facts the reader can verify".to_string());
        }
        if passive_voice_count > PASSIVE_THRESHOLD {
            recommendations.push(format!(
                "Rewrite passive constructions in the active voice ({passive_voice_count} found)"
            ));
        }

        debug!(
            polarity = sentiment.polarity,
            subjectivity = sentiment.subjectivity,
            passive = passive_voice_count,
            "Tone analyzed"
        );

        ToneResult {
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
            is_neutral,
            is_subjective,
            passive_voice_count,
            formality_score,
            target_tone: target_tone.to_string(),
            meets_target,
            recommendations,
        }
    }
}

/// A clause is passive when a form of "be" is followed by a past
/// participle, allowing adverbs and negators between them
/// ("was not properly tested"). Each clause counts once.
fn is_passive(clause: &Clause) -> bool {
    for (i, token) in clause.tokens.iter().enumerate() {
        if !tagger::is_be_auxiliary(&token.text) {
            continue;
        }
        for follower in clause.tokens.iter().skip(i + 1) {
            if tagger::is_past_participle(&follower.text) {
                return true;
            }
            let lower = follower.text.to_ascii_lowercase();
            let skippable =
                lower == "not" || lower == "never" || (lower.ends_with("ly") && lower.len() > 4);
            if !skippable {
                break;
            }
        }
    }
    false
}

/// Formality in [0, 1]: half from average word length (8+ chars saturates),
/// half from the complex-word ratio (30% saturates).
fn formality(metrics: &TextMetrics) -> f64 {
    if metrics.word_count == 0 {
        return 0.0;
    }
    let length_part = (metrics.avg_word_length / 8.0).min(1.0);
    let complexity_part = (metrics.complex_word_ratio() / 30.0).min(1.0);
    let raw = 0.5 * length_part + 0.5 * complexity_part;
    super::round1(raw * 10.0) / 10.0
}
