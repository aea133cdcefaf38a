// SPDX-License-Identifier: PMPL-1.0-or-later
//! Two-stage compliance pipeline.
//!
//! Stage 1 enhances a prompt with accessibility instructions before
//! generation. Stage 2 validates the generated output and, when it scores
//! below the threshold, drives a bounded validate→fix loop. Generation and
//! fixing are external, potentially slow and failing calls behind the
//! [`TextGenerator`] and [`TextFixer`] traits; the orchestrator keeps at
//! most one outstanding call and never retries a hard external failure.

use crate::engine::{ComplianceEngine, ComplianceReport};
use crate::error::{ClarityError, Result};
use crate::inject::AccessibilityInjector;
use crate::rules::{ContentType, RuleSet};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// External text generation: prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// External rewriting: text plus the issues found in it, rewritten text out.
#[async_trait]
pub trait TextFixer: Send + Sync {
    async fn fix(&self, text: &str, issues: &[String]) -> anyhow::Result<String>;
}

/// Pipeline tuning knobs
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Minimum overall score that needs no fixing
    pub threshold: f64,
    /// Upper bound on generation/fix attempts; each external call can carry
    /// real cost, so the default stays small
    pub max_attempts: usize,
    /// Grade ceiling passed to the compliance engine
    pub target_grade: f64,
    /// Prepend the plain-language directive during prompt enhancement
    pub strict: bool,
    /// Abort an outstanding external call after this long
    pub call_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            max_attempts: 2,
            target_grade: crate::analyzers::readability::DEFAULT_TARGET_GRADE,
            strict: false,
            call_timeout: None,
        }
    }
}

/// Terminal state of the validate→fix loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineOutcome {
    /// A candidate reached the threshold
    Satisfied,
    /// Attempts ran out; the best candidate seen is returned anyway
    Exhausted,
}

/// Result of a full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    /// The delivered text: the passing candidate, or on exhaustion the
    /// best-scoring candidate seen (ties broken by earliest attempt)
    pub final_output: String,
    /// Score of the most recent attempt (the last history entry)
    pub compliance_score: f64,
    /// Whether any fix attempt ran
    pub was_fixed: bool,
    /// Number of scored attempts; always equals `history.len()`
    pub attempts: usize,
    pub outcome: PipelineOutcome,
    /// One report per attempt, in chronological order
    pub history: Vec<ComplianceReport>,
}

/// Stage 2 validation verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub report: ComplianceReport,
    pub needs_fixing: bool,
}

/// Outcome of one fix call: the candidate and its fresh report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixOutcome {
    pub rewritten: String,
    pub report: ComplianceReport,
}

/// Directive prepended in strict mode, Stage 1.
fn strict_directive(target_grade: f64) -> String {
    format!(
        "Write at or below a grade {target_grade:.0} reading level. Use short sentences, \
         common words, and the active voice. Avoid jargon; define any acronym at first use.\n\n"
    )
}

/// Runs the enhance→generate→validate→fix loop.
pub struct PipelineOrchestrator {
    engine: ComplianceEngine,
    injector: AccessibilityInjector,
    config: PipelineConfig,
}

impl PipelineOrchestrator {
    pub fn new(rules: Arc<RuleSet>, config: PipelineConfig) -> Self {
        Self {
            engine: ComplianceEngine::new(rules.clone()),
            injector: AccessibilityInjector::new(rules),
            config,
        }
    }

    pub fn with_defaults(rules: Arc<RuleSet>) -> Self {
        Self::new(rules, PipelineConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Stage 1: enhance a prompt with accessibility instructions, and in
    /// strict mode a plain-language directive.
    pub fn enhance_prompt(&self, prompt: &str, content_type: ContentType, strict: bool) -> String {
        let enhanced = self.injector.inject(prompt, content_type);
        if strict {
            format!("{}{}", strict_directive(self.config.target_grade), enhanced)
        } else {
            enhanced
        }
    }

    /// Stage 2: score a text and decide whether it needs fixing against the
    /// given threshold.
    pub fn validate(&self, text: &str, threshold: f64) -> Validation {
        let report = self.engine.analyze(text, self.config.target_grade);
        let needs_fixing = report.overall_score < threshold;
        Validation {
            report,
            needs_fixing,
        }
    }

    /// Run one fix call and re-score the candidate.
    pub async fn fix(&self, text: &str, fixer: &dyn TextFixer) -> Result<FixOutcome> {
        let validation = self.validate(text, self.config.threshold);
        let rewritten = self
            .call_fix(fixer, text, &validation.report.issues, 1)
            .await?;
        let report = self.engine.analyze(&rewritten, self.config.target_grade);
        Ok(FixOutcome { rewritten, report })
    }

    /// End-to-end: enhance, generate, then validate and fix until the
    /// threshold is met or attempts run out.
    ///
    /// A failed generation or fix call aborts the run without recording a
    /// history entry for that attempt; the error carries the stage and
    /// attempt index.
    pub async fn ensure_compliance(
        &self,
        prompt: &str,
        content_type: ContentType,
        generator: &dyn TextGenerator,
        fixer: &dyn TextFixer,
    ) -> Result<PipelineResult> {
        let enhanced = self.enhance_prompt(prompt, content_type, self.config.strict);
        debug!(
            added = enhanced.len() - prompt.len(),
            "Prompt enhanced for generation"
        );

        let output = self.call_generate(generator, &enhanced, 1).await?;
        self.refine(output, fixer).await
    }

    /// Validate→fix loop over an existing text, no generation stage.
    pub async fn optimize(&self, text: &str, fixer: &dyn TextFixer) -> Result<PipelineResult> {
        self.refine(text.to_string(), fixer).await
    }

    /// The bounded validate→fix loop shared by `ensure_compliance` and
    /// `optimize`. Strictly sequential: attempt N's candidate seeds
    /// attempt N+1.
    async fn refine(&self, initial: String, fixer: &dyn TextFixer) -> Result<PipelineResult> {
        let max_attempts = self.config.max_attempts.max(1);

        let mut current = initial;

        let first = self.engine.analyze(&current, self.config.target_grade);
        // best candidate so far: strictly-greater replacement keeps the
        // earliest attempt on ties
        let mut best_score = first.overall_score;
        let mut best_text = current.clone();
        let mut history = vec![first];
        let mut attempts = 1usize;

        let outcome = loop {
            let last_score = history
                .last()
                .map(|r| r.overall_score)
                .unwrap_or(0.0);

            if last_score >= self.config.threshold {
                info!(score = last_score, attempts, "Pipeline satisfied");
                break PipelineOutcome::Satisfied;
            }
            if attempts >= max_attempts {
                warn!(
                    best = best_score,
                    attempts, "Pipeline exhausted without reaching threshold"
                );
                break PipelineOutcome::Exhausted;
            }

            let issues = history
                .last()
                .map(|r| r.issues.clone())
                .unwrap_or_default();
            let candidate = self.call_fix(fixer, &current, &issues, attempts + 1).await?;
            let report = self.engine.analyze(&candidate, self.config.target_grade);
            debug!(
                attempt = attempts + 1,
                score = report.overall_score,
                "Fix attempt scored"
            );

            if report.overall_score > best_score {
                best_score = report.overall_score;
                best_text = candidate.clone();
            }
            history.push(report);
            attempts += 1;
            current = candidate;
        };

        let compliance_score = history
            .last()
            .map(|r| r.overall_score)
            .unwrap_or(0.0);
        let final_output = match outcome {
            PipelineOutcome::Satisfied => current,
            PipelineOutcome::Exhausted => best_text,
        };

        Ok(PipelineResult {
            final_output,
            compliance_score,
            was_fixed: attempts > 1,
            attempts,
            outcome,
            history,
        })
    }

    async fn call_generate(
        &self,
        generator: &dyn TextGenerator,
        prompt: &str,
        attempt: usize,
    ) -> Result<String> {
        let call = generator.generate(prompt);
        let result = match self.config.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| ClarityError::Timeout(limit))?,
            None => call.await,
        };
        result.map_err(|source| ClarityError::Generation { attempt, source })
    }

    async fn call_fix(
        &self,
        fixer: &dyn TextFixer,
        text: &str,
        issues: &[String],
        attempt: usize,
    ) -> Result<String> {
        let call = fixer.fix(text, issues);
        let result = match self.config.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| ClarityError::Timeout(limit))?,
            None => call.await,
        };
        result.map_err(|source| ClarityError::Fix { attempt, source })
    }
}

/// Rule-backed rewriter: swaps flagged terms for their plain replacements
/// and splits overlong sentences. A serviceable [`TextFixer`] when no
/// generative rewriter is wired in.
pub struct RuleBasedFixer {
    rules: Arc<RuleSet>,
}

impl RuleBasedFixer {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    fn replace_terms(&self, text: &str) -> String {
        let word_re = Regex::new(r"[A-Za-z0-9]+(?:['\-][A-Za-z0-9]+)*").expect("valid regex");
        word_re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let word = &caps[0];
                match self.rules.replacement(word) {
                    Some(replacement) => match_case(word, replacement),
                    None => word.to_string(),
                }
            })
            .into_owned()
    }

    fn split_long_sentences(text: &str) -> String {
        text.split_inclusive(['.', '!', '?'])
            .map(|sentence| {
                let words = sentence.split_whitespace().count();
                if words > 20 {
                    // break at the first coordinating comma
                    sentence.replacen(", and ", ". ", 1).replacen(", but ", ". ", 1)
                } else {
                    sentence.to_string()
                }
            })
            .collect()
    }
}

/// Carry the original word's leading capital over to its replacement.
fn match_case(original: &str, replacement: &str) -> String {
    let starts_upper = original.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[async_trait]
impl TextFixer for RuleBasedFixer {
    async fn fix(&self, text: &str, _issues: &[String]) -> anyhow::Result<String> {
        let replaced = self.replace_terms(text);
        Ok(Self::split_long_sentences(&replaced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orchestrator() -> PipelineOrchestrator {
        PipelineOrchestrator::with_defaults(Arc::new(RuleSet::defaults().unwrap()))
    }

    #[test]
    fn test_enhance_prompt_appends_template() {
        let out = orchestrator().enhance_prompt("Describe the chart.", ContentType::Images, false);
        assert!(out.starts_with("Describe the chart."));
        assert!(out.contains("alt text"));
    }

    #[test]
    fn test_strict_mode_prepends_directive() {
        let out = orchestrator().enhance_prompt("Explain DNS.", ContentType::General, true);
        assert!(out.starts_with("Write at or below a grade 8 reading level."));
        assert!(out.contains("Explain DNS."));
    }

    #[test]
    fn test_validate_flags_low_score() {
        let orchestrator = orchestrator();
        let bad = "Utilize the API to facilitate data transmission and implement visualization.";
        let validation = orchestrator.validate(bad, 70.0);
        assert!(validation.needs_fixing);
        assert!(validation.report.overall_score < 70.0);

        let good = orchestrator.validate("The cat sat on the mat.", 70.0);
        assert!(!good.needs_fixing);
    }

    #[tokio::test]
    async fn test_rule_based_fixer_replaces_terms() {
        let fixer = RuleBasedFixer::new(Arc::new(RuleSet::defaults().unwrap()));
        let out = fixer
            .fix("Utilize the tool to facilitate work.", &[])
            .await
            .unwrap();
        assert_eq!(out, "Use the tool to help work.");
    }

    #[tokio::test]
    async fn test_rule_based_fixer_splits_long_sentences() {
        let fixer = RuleBasedFixer::new(Arc::new(RuleSet::defaults().unwrap()));
        let long = "The team reviewed every open item on the agenda in the morning session, \
                    and the afternoon session covered the remaining questions from the field offices in detail.";
        let out = fixer.fix(long, &[]).await.unwrap();
        assert!(out.matches(". ").count() >= 1);
        assert!(!out.contains(", and the afternoon"));
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("Utilize", "use"), "Use");
        assert_eq!(match_case("utilize", "use"), "use");
        assert_eq!(match_case("SHALL", "must"), "Must");
    }
}
