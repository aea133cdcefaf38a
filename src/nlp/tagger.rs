// SPDX-License-Identifier: PMPL-1.0-or-later
//! Lightweight part-of-speech tagging.
//!
//! Closed-class words are looked up directly; open-class words fall back to
//! suffix heuristics. Good enough to separate content words from function
//! words and to spot auxiliaries and participles for the tone analyzer.

use super::PosTag;

const DETERMINERS: &[&str] = &["a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no"];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their", "mine", "yours", "ours", "theirs",
    "who", "whom", "which", "what",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up",
    "down", "of", "off", "over", "under",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "so", "yet", "because", "although", "while", "if", "unless", "since", "when"];

/// Forms of "be" that can head a passive construction.
pub const BE_AUXILIARIES: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

/// Other auxiliaries and modals, tagged as verbs.
const AUXILIARIES: &[&str] = &[
    "have", "has", "had", "do", "does", "did", "will", "would", "shall", "should",
    "may", "might", "must", "can", "could",
];

/// Common irregular past participles the "-ed" suffix rule misses.
pub const IRREGULAR_PARTICIPLES: &[&str] = &[
    "begun", "broken", "brought", "built", "bought", "chosen", "done", "drawn",
    "driven", "eaten", "fallen", "felt", "found", "given", "gone", "grown",
    "held", "hidden", "kept", "known", "laid", "led", "left", "lost", "made",
    "meant", "met", "paid", "put", "read", "run", "said", "seen", "sent", "set",
    "shown", "sold", "spent", "spoken", "taken", "taught", "thought", "told",
    "understood", "won", "written",
];

/// Tag a single word. Input casing is ignored.
pub fn tag(word: &str) -> PosTag {
    let lower = word.to_ascii_lowercase();
    let w = lower.as_str();

    if w.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::Number;
    }
    if DETERMINERS.contains(&w) {
        return PosTag::Determiner;
    }
    if PRONOUNS.contains(&w) {
        return PosTag::Pronoun;
    }
    if PREPOSITIONS.contains(&w) {
        return PosTag::Preposition;
    }
    if CONJUNCTIONS.contains(&w) {
        return PosTag::Conjunction;
    }
    if BE_AUXILIARIES.contains(&w) || AUXILIARIES.contains(&w) {
        return PosTag::Verb;
    }
    if IRREGULAR_PARTICIPLES.contains(&w) {
        return PosTag::Verb;
    }

    // Suffix heuristics for open-class words
    if w.ends_with("ly") && w.len() > 4 {
        return PosTag::Adverb;
    }
    if w.ends_with("ing") || w.ends_with("ed") || w.ends_with("ize") || w.ends_with("ate") {
        if w.len() > 4 {
            return PosTag::Verb;
        }
    }
    if w.ends_with("ful") || w.ends_with("ous") || w.ends_with("ive") || w.ends_with("able") || w.ends_with("ible") || w.ends_with("al") {
        return PosTag::Adjective;
    }
    if w.ends_with("tion") || w.ends_with("sion") || w.ends_with("ment") || w.ends_with("ness") || w.ends_with("ity") || w.ends_with("ance") || w.ends_with("ence") {
        return PosTag::Noun;
    }

    PosTag::Noun
}

/// Whether a word is a form of "be" usable as a passive auxiliary.
pub fn is_be_auxiliary(word: &str) -> bool {
    BE_AUXILIARIES.contains(&word.to_ascii_lowercase().as_str())
}

/// Whether a word looks like a past participle.
pub fn is_past_participle(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    if IRREGULAR_PARTICIPLES.contains(&lower.as_str()) {
        return true;
    }
    lower.len() > 3 && lower.ends_with("ed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::PosTag;

    #[test]
    fn test_closed_class_tags() {
        assert_eq!(tag("the"), PosTag::Determiner);
        assert_eq!(tag("They"), PosTag::Pronoun);
        assert_eq!(tag("between"), PosTag::Preposition);
        assert_eq!(tag("because"), PosTag::Conjunction);
        assert_eq!(tag("42"), PosTag::Number);
    }

    #[test]
    fn test_suffix_tags() {
        assert_eq!(tag("quickly"), PosTag::Adverb);
        assert_eq!(tag("running"), PosTag::Verb);
        assert_eq!(tag("utilize"), PosTag::Verb);
        assert_eq!(tag("beautiful"), PosTag::Adjective);
        assert_eq!(tag("transmission"), PosTag::Noun);
    }

    #[test]
    fn test_participle_detection() {
        assert!(is_past_participle("approved"));
        assert!(is_past_participle("written"));
        assert!(is_past_participle("made"));
        assert!(!is_past_participle("red"));
        assert!(!is_past_participle("cat"));
    }

    #[test]
    fn test_be_auxiliary() {
        assert!(is_be_auxiliary("was"));
        assert!(is_be_auxiliary("Being"));
        assert!(!is_be_auxiliary("has"));
    }
}
