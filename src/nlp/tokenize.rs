// SPDX-License-Identifier: PMPL-1.0-or-later
//! Tokenization, sentence splitting, and syllable counting.
//!
//! All heuristics are ASCII-English. Case folding is locale-invariant
//! ASCII throughout so rule-table lookups behave the same on every host.

use super::Token;
use regex::Regex;

/// Split text into word tokens, preserving original casing and byte offsets.
/// Internal apostrophes and hyphens stay inside a token ("don't", "well-lit").
pub fn words(text: &str) -> Vec<Token> {
    let word_re = Regex::new(r"[A-Za-z0-9]+(?:['\-][A-Za-z0-9]+)*").expect("valid regex");
    word_re
        .find_iter(text)
        .map(|m| Token {
            text: m.as_str().to_string(),
            offset: m.start(),
        })
        .collect()
}

/// Split text into sentences on terminal punctuation. Empty segments are
/// dropped, so "..." does not produce phantom sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count syllables in a single word (English vowel-group heuristic).
pub fn syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if word.is_empty() {
        return 0;
    }

    if word.len() <= 3 {
        return 1;
    }

    let vowels = ['a', 'e', 'i', 'o', 'u', 'y'];
    let mut count = 0;
    let mut prev_vowel = false;

    for ch in word.chars() {
        if vowels.contains(&ch) {
            if !prev_vowel {
                count += 1;
            }
            prev_vowel = true;
        } else {
            prev_vowel = false;
        }
    }

    // Silent e at end
    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// A word is complex when it carries three or more syllables.
pub fn is_complex(word: &str) -> bool {
    syllables(word) >= 3
}
