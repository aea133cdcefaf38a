// SPDX-License-Identifier: PMPL-1.0-or-later
//! Jargon and undefined-acronym detection against the rule tables.

use crate::nlp::{Linguistic, PosTag};
use crate::rules::RuleSet;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Acronyms common enough to need no definition.
const ALLOWED_ACRONYMS: &[&str] = &[
    "AM", "PM", "OK", "TV", "ID", "FAQ", "USA", "US", "UK", "EU", "UN", "PDF", "URL",
];

/// Jargon findings for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JargonResult {
    /// Matched terms, original casing, first-occurrence order, one entry
    /// per distinct term
    pub jargon_words: Vec<String>,
    /// Total matched occurrences (repeats counted)
    pub jargon_count: usize,
    /// Percentage of tokens that matched a rule table
    pub jargon_ratio: f64,
    /// All-caps tokens never defined in their sentence
    pub undefined_acronyms: Vec<String>,
    /// Percentage of words with three or more syllables
    pub complex_word_ratio: f64,
    pub word_count: usize,
    pub has_issues: bool,
    /// Matched term -> plain-language replacement, where the tables have one
    pub suggestions: BTreeMap<String, String>,
    pub recommendations: Vec<String>,
}

/// Flags jargon terms and undefined acronyms using the shared rule tables.
pub struct JargonDetector {
    rules: Arc<RuleSet>,
    nlp: Arc<dyn Linguistic>,
}

impl JargonDetector {
    pub fn new(rules: Arc<RuleSet>, nlp: Arc<dyn Linguistic>) -> Self {
        Self { rules, nlp }
    }

    /// Detect jargon, government terms, and undefined acronyms.
    pub fn detect(&self, text: &str) -> JargonResult {
        let tagged = self.nlp.parts_of_speech(text);
        let word_count = tagged.len();

        if word_count == 0 {
            return JargonResult {
                jargon_words: Vec::new(),
                jargon_count: 0,
                jargon_ratio: 0.0,
                undefined_acronyms: Vec::new(),
                complex_word_ratio: 0.0,
                word_count: 0,
                has_issues: false,
                suggestions: BTreeMap::new(),
                recommendations: Vec::new(),
            };
        }

        let mut jargon_words = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut suggestions = BTreeMap::new();
        let mut jargon_count = 0;
        let mut complex_count = 0;

        for (token, tag) in &tagged {
            if *tag == PosTag::Number {
                continue;
            }
            if crate::nlp::tokenize::syllables(&token.text) >= 3 {
                complex_count += 1;
            }
            if self.rules.is_flagged_term(&token.text) {
                jargon_count += 1;
                let key = token.text.to_ascii_lowercase();
                if seen.insert(key) {
                    if let Some(replacement) = self.rules.replacement(&token.text) {
                        suggestions.insert(token.text.clone(), replacement.to_string());
                    }
                    jargon_words.push(token.text.clone());
                }
            }
        }

        let jargon_ratio = 100.0 * jargon_count as f64 / word_count as f64;
        let complex_word_ratio = 100.0 * complex_count as f64 / word_count as f64;
        let undefined_acronyms = find_undefined_acronyms(text);

        let has_issues =
            jargon_ratio >= 5.0 || !undefined_acronyms.is_empty() || complex_word_ratio >= 15.0;

        let mut recommendations = Vec::new();
        for word in &jargon_words {
            if let Some(replacement) = suggestions.get(word) {
                recommendations.push(format!("Replace '{word}' with '{replacement}'"));
            }
        }
        for acro in &undefined_acronyms {
            recommendations.push(format!("Define '{acro}' at first use, for example: Full Name ({acro})"));
        }
        if complex_word_ratio >= 15.0 {
            recommendations.push("Swap long words for shorter everyday words".to_string());
        }

        debug!(
            jargon = jargon_count,
            acronyms = undefined_acronyms.len(),
            ratio = jargon_ratio,
            "Jargon scan complete"
        );

        JargonResult {
            jargon_words,
            jargon_count,
            jargon_ratio: super::round1(jargon_ratio),
            undefined_acronyms,
            complex_word_ratio: super::round1(complex_word_ratio),
            word_count,
            has_issues,
            suggestions,
            recommendations,
        }
    }
}

/// Find all-caps tokens that are never defined within their own sentence.
///
/// A sentence-leading word like "The" has only its first letter capitalized,
/// so the two-uppercase minimum never flags it. ASCII case comparison only.
fn find_undefined_acronyms(text: &str) -> Vec<String> {
    let acronym_re = Regex::new(r"\b[A-Z]{2,}\b").expect("valid regex");
    let mut found = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for sentence in crate::nlp::tokenize::sentences(text) {
        for m in acronym_re.find_iter(sentence) {
            let acro = m.as_str();
            if ALLOWED_ACRONYMS.contains(&acro) {
                continue;
            }
            if is_defined_in(sentence, acro) {
                continue;
            }
            if seen.insert(acro.to_string()) {
                found.push(acro.to_string());
            }
        }
    }

    found
}

/// A parenthetical or defining clause next to the acronym counts as a
/// definition: "API (Application Programming Interface)" or
/// "Application Programming Interface (API)" or "API stands for ...".
fn is_defined_in(sentence: &str, acronym: &str) -> bool {
    sentence.contains(&format!("{acronym} ("))
        || sentence.contains(&format!("{acronym}("))
        || sentence.contains(&format!("({acronym})"))
        || sentence.contains(&format!("{acronym} stands for"))
        || sentence.contains(&format!("{acronym} means"))
}
