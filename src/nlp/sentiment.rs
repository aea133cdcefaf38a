// SPDX-License-Identifier: PMPL-1.0-or-later
//! Lexicon-based sentiment scoring.
//!
//! Each lexicon entry carries a polarity in [-1, 1] and a subjectivity in
//! [0, 1]. Document scores are the mean over matched entries, with simple
//! negation flipping and intensifier boosting. Unmatched text scores
//! (0.0, 0.0), which reads as neutral and objective.

use super::{tokenize, SentimentScore};

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.9, 0.9),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("happy", 0.8, 1.0),
    ("perfect", 1.0, 1.0),
    ("easy", 0.4, 0.8),
    ("helpful", 0.5, 0.5),
    ("clear", 0.3, 0.4),
    ("simple", 0.3, 0.4),
    ("effective", 0.6, 0.6),
    ("reliable", 0.5, 0.5),
    ("beautiful", 0.85, 1.0),
    ("awesome", 1.0, 1.0),
    ("delightful", 0.9, 1.0),
    // negative
    ("bad", -0.7, 0.67),
    ("worst", -1.0, 1.0),
    ("worse", -0.5, 0.5),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("hate", -0.8, 0.9),
    ("poor", -0.4, 0.6),
    ("difficult", -0.5, 0.7),
    ("confusing", -0.5, 0.8),
    ("broken", -0.4, 0.5),
    ("useless", -0.8, 0.9),
    ("wrong", -0.5, 0.5),
    ("fail", -0.6, 0.5),
    ("failure", -0.6, 0.5),
    ("ugly", -0.7, 1.0),
    ("annoying", -0.6, 0.9),
    ("disappointing", -0.6, 0.7),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    // subjective but near-neutral polarity
    ("think", 0.0, 0.6),
    ("believe", 0.0, 0.6),
    ("feel", 0.0, 0.7),
    ("seems", 0.0, 0.5),
    ("probably", 0.0, 0.5),
    ("maybe", 0.0, 0.5),
    ("obviously", 0.0, 0.8),
    ("certainly", 0.2, 0.7),
    ("definitely", 0.2, 0.8),
    ("honestly", 0.1, 0.9),
];

const NEGATORS: &[&str] = &["not", "no", "never", "neither", "nor", "without", "hardly", "barely"];

const INTENSIFIERS: &[&str] = &["very", "extremely", "really", "incredibly", "absolutely", "totally", "so"];

/// Score a span of text. Returns (0.0, 0.0) for empty or lexicon-free text.
pub fn score(text: &str) -> SentimentScore {
    let tokens = tokenize::words(text);
    let mut polarities = Vec::new();
    let mut subjectivities = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let lower = token.text.to_ascii_lowercase();
        let entry = LEXICON.iter().find(|(w, _, _)| *w == lower);
        let Some((_, mut polarity, subjectivity)) = entry.copied() else {
            continue;
        };

        // Look back up to two tokens for negation and intensifiers
        let window_start = i.saturating_sub(2);
        let window: Vec<String> = tokens[window_start..i]
            .iter()
            .map(|t| t.text.to_ascii_lowercase())
            .collect();

        let negated = window
            .iter()
            .any(|w| NEGATORS.contains(&w.as_str()) || w.ends_with("n't"));
        let intensified = window.iter().any(|w| INTENSIFIERS.contains(&w.as_str()));

        if negated {
            polarity = -polarity * 0.5;
        }
        if intensified {
            polarity *= 1.3;
        }

        polarities.push(polarity.clamp(-1.0, 1.0));
        subjectivities.push(subjectivity);
    }

    if polarities.is_empty() {
        return SentimentScore {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
    let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;

    SentimentScore {
        polarity: polarity.clamp(-1.0, 1.0),
        subjectivity: subjectivity.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text_scores_zero() {
        let s = score("The report covers water usage in three regions.");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn test_positive_text() {
        let s = score("This is an excellent and wonderful result.");
        assert!(s.polarity > 0.3);
        assert!(s.subjectivity > 0.5);
    }

    #[test]
    fn test_negative_text() {
        let s = score("This is a terrible, awful failure.");
        assert!(s.polarity < -0.3);
    }

    #[test]
    fn test_negation_flips() {
        let positive = score("The tool is good.");
        let negated = score("The tool is not good.");
        assert!(positive.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn test_intensifier_boosts() {
        let plain = score("The result is good.");
        let boosted = score("The result is very good.");
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn test_bounds() {
        let s = score("amazing amazing terrible wonderful worst best awful excellent");
        assert!((-1.0..=1.0).contains(&s.polarity));
        assert!((0.0..=1.0).contains(&s.subjectivity));
    }

    #[test]
    fn test_empty_text() {
        let s = score("");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }
}
