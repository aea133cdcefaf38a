// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility instruction injection (pipeline Stage 1).
//!
//! Appends the rule-table template for a content type to a prompt under a
//! fixed header. Pure and side-effect free. Calling it twice appends two
//! blocks; deduplication is the caller's responsibility.

use crate::rules::{ContentType, RuleSet};
use std::sync::Arc;

/// Header line that delimits the injected block
const BLOCK_HEADER: &str = "--- Accessibility Requirements ---";

/// Appends content-type-specific accessibility instructions from the rule
/// tables.
pub struct AccessibilityInjector {
    rules: Arc<RuleSet>,
}

impl AccessibilityInjector {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Append the template for `content_type` to `text` as a delimited block.
    pub fn inject(&self, text: &str, content_type: ContentType) -> String {
        let template = self.rules.template(content_type);
        format!("{text}\n\n{BLOCK_HEADER}\n{template}")
    }

    /// Convenience for free-form labels; unknown labels get the general
    /// template.
    pub fn inject_labeled(&self, text: &str, label: &str) -> String {
        self.inject(text, ContentType::from_label(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn injector() -> AccessibilityInjector {
        AccessibilityInjector::new(Arc::new(RuleSet::defaults().unwrap()))
    }

    #[test]
    fn test_inject_images_template() {
        let out = injector().inject("Describe the chart.", ContentType::Images);
        assert!(out.starts_with("Describe the chart."));
        assert!(out.contains(BLOCK_HEADER));
        assert!(out.contains("alt text"));
    }

    #[test]
    fn test_unknown_label_gets_general() {
        let injector = injector();
        let out = injector.inject_labeled("Write a memo.", "something-else");
        let general = injector.inject("Write a memo.", ContentType::General);
        assert_eq!(out, general);
    }

    #[test]
    fn test_double_injection_appends_twice() {
        let injector = injector();
        let once = injector.inject("Text.", ContentType::Forms);
        let twice = injector.inject(&once, ContentType::Forms);
        assert_eq!(twice.matches(BLOCK_HEADER).count(), 2);
    }

    #[test]
    fn test_original_text_preserved() {
        let out = injector().inject("Keep me intact.", ContentType::Links);
        assert!(out.contains("Keep me intact."));
    }
}
