// SPDX-License-Identifier: PMPL-1.0-or-later
//! Pluggable linguistic analysis.
//!
//! The analyzers depend on natural-language capabilities only through the
//! [`Linguistic`] trait: tokenization, part-of-speech tagging, a shallow
//! clause parse, and sentiment. [`LexiconNlp`] is the built-in
//! implementation; any conforming NLP toolkit can substitute behind the
//! trait without touching scoring logic.

pub mod sentiment;
pub mod tagger;
pub mod tokenize;

/// A word token with its original casing and byte offset in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text, casing preserved
    pub text: String,
    /// Byte offset of the token start in the analyzed text
    pub offset: usize,
}

/// Coarse part-of-speech categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
}

/// Sentiment for a span of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Polarity in [-1, 1]; negative is critical, positive is favorable
    pub polarity: f64,
    /// Subjectivity in [0, 1]; 0 is purely factual
    pub subjectivity: f64,
}

/// A contiguous run of tokens between clause boundaries
#[derive(Debug, Clone)]
pub struct Clause {
    pub tokens: Vec<Token>,
}

/// The linguistic capability the analyzers are written against.
pub trait Linguistic: Send + Sync {
    /// Split text into word tokens, casing preserved.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Tag each token with a coarse part of speech.
    fn parts_of_speech(&self, text: &str) -> Vec<(Token, PosTag)>;

    /// Shallow structural parse: the text split into clauses at punctuation
    /// boundaries. Enough structure for auxiliary/participle pattern checks.
    fn dependency_parse(&self, text: &str) -> Vec<Clause>;

    /// Sentiment over the whole span.
    fn sentiment(&self, text: &str) -> SentimentScore;
}

/// Built-in lexicon- and heuristic-backed implementation of [`Linguistic`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconNlp;

impl Linguistic for LexiconNlp {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize::words(text)
    }

    fn parts_of_speech(&self, text: &str) -> Vec<(Token, PosTag)> {
        tokenize::words(text)
            .into_iter()
            .map(|t| {
                let tag = tagger::tag(&t.text);
                (t, tag)
            })
            .collect()
    }

    fn dependency_parse(&self, text: &str) -> Vec<Clause> {
        text.split([',', ';', ':', '.', '!', '?', '(', ')'])
            .filter_map(|fragment| {
                let tokens = tokenize::words(fragment);
                if tokens.is_empty() {
                    None
                } else {
                    Some(Clause { tokens })
                }
            })
            .collect()
    }

    fn sentiment(&self, text: &str) -> SentimentScore {
        sentiment::score(text)
    }
}
