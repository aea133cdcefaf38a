// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule tables for plain-language and accessibility analysis.
//!
//! Three JSON documents back the engine: jargon replacements, government
//! plain-language terms, and per-content-type accessibility instruction
//! templates. They are loaded once into an immutable [`RuleSet`] and shared
//! read-only for the life of the process. Updating the tables never requires
//! recompilation; defaults are embedded so the binary runs with zero setup.

use crate::error::{ClarityError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Embedded default rule tables
const DEFAULT_JARGON: &str = include_str!("../rules/jargon.json");
const DEFAULT_GOV_TERMS: &str = include_str!("../rules/gov_terms.json");
const DEFAULT_TEMPLATES: &str = include_str!("../rules/accessibility.json");

/// Content categories for accessibility instruction templates.
///
/// Closed enumeration; anything unrecognized maps to [`ContentType::General`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Still images, charts, diagrams
    Images,
    /// Audio and video
    Multimedia,
    /// Long-form documents
    Documents,
    /// Hyperlink text
    Links,
    /// Forms and input fields
    Forms,
    /// Fallback for everything else
    General,
}

impl ContentType {
    /// Map a free-form label to a content type. Unknown labels become
    /// `General` rather than failing.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "images" | "image" => ContentType::Images,
            "multimedia" | "video" | "audio" => ContentType::Multimedia,
            "documents" | "document" => ContentType::Documents,
            "links" | "link" => ContentType::Links,
            "forms" | "form" => ContentType::Forms,
            _ => ContentType::General,
        }
    }

    /// The canonical JSON key for this content type
    pub fn key(&self) -> &'static str {
        match self {
            ContentType::Images => "images",
            ContentType::Multimedia => "multimedia",
            ContentType::Documents => "documents",
            ContentType::Links => "links",
            ContentType::Forms => "forms",
            ContentType::General => "general",
        }
    }

    /// Parse a canonical key exactly. Used for rule-table validation, where
    /// an unknown key is an error rather than a fallback.
    fn from_key_strict(key: &str) -> Option<Self> {
        match key {
            "images" => Some(ContentType::Images),
            "multimedia" => Some(ContentType::Multimedia),
            "documents" => Some(ContentType::Documents),
            "links" => Some(ContentType::Links),
            "forms" => Some(ContentType::Forms),
            "general" => Some(ContentType::General),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Immutable rule tables shared by all analyzers.
///
/// Keys are case-normalized (ASCII lowercase) at load time; a collision
/// after normalization is a load-time error, so lookups never depend on
/// source casing. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct RuleSet {
    jargon_replacements: HashMap<String, String>,
    gov_plain_terms: HashMap<String, String>,
    accessibility_templates: HashMap<ContentType, String>,
}

impl RuleSet {
    /// Build a rule set from the embedded default tables.
    pub fn defaults() -> Result<Self> {
        Self::from_json(DEFAULT_JARGON, DEFAULT_GOV_TERMS, DEFAULT_TEMPLATES)
    }

    /// Load the three rule documents from disk.
    ///
    /// Malformed JSON or invalid keys abort the load; the engine never runs
    /// with a partially loaded rule set.
    pub fn load(jargon: &Path, gov_terms: &Path, templates: &Path) -> Result<Self> {
        let jargon_src = std::fs::read_to_string(jargon)?;
        let gov_src = std::fs::read_to_string(gov_terms)?;
        let templates_src = std::fs::read_to_string(templates)?;
        let rules = Self::from_json(&jargon_src, &gov_src, &templates_src)?;
        debug!(
            jargon = rules.jargon_replacements.len(),
            gov_terms = rules.gov_plain_terms.len(),
            templates = rules.accessibility_templates.len(),
            "Loaded rule tables"
        );
        Ok(rules)
    }

    /// Parse and validate the three JSON documents.
    pub fn from_json(jargon: &str, gov_terms: &str, templates: &str) -> Result<Self> {
        let jargon_replacements = normalize_table(serde_json::from_str(jargon)?, "jargon")?;
        let gov_plain_terms = normalize_table(serde_json::from_str(gov_terms)?, "gov-terms")?;

        let raw_templates: HashMap<String, String> = serde_json::from_str(templates)?;
        let mut accessibility_templates = HashMap::new();
        for (key, value) in raw_templates {
            let normalized = key.trim().to_ascii_lowercase();
            let content_type = ContentType::from_key_strict(&normalized)
                .ok_or_else(|| ClarityError::UnknownContentType(key.clone()))?;
            if accessibility_templates.insert(content_type, value).is_some() {
                return Err(ClarityError::RuleTable(format!(
                    "duplicate accessibility template key after normalization: {normalized}"
                )));
            }
        }
        if !accessibility_templates.contains_key(&ContentType::General) {
            return Err(ClarityError::RuleTable(
                "accessibility templates must define a 'general' fallback".to_string(),
            ));
        }

        Ok(Self {
            jargon_replacements,
            gov_plain_terms,
            accessibility_templates,
        })
    }

    /// Look up the plain-language replacement for a jargon term, if any.
    /// Checks the jargon table first, then the government terms table.
    pub fn replacement(&self, word: &str) -> Option<&str> {
        let key = word.to_ascii_lowercase();
        self.jargon_replacements
            .get(&key)
            .or_else(|| self.gov_plain_terms.get(&key))
            .map(String::as_str)
    }

    /// Whether a word appears in either lookup table (case-insensitive).
    pub fn is_flagged_term(&self, word: &str) -> bool {
        let key = word.to_ascii_lowercase();
        self.jargon_replacements.contains_key(&key) || self.gov_plain_terms.contains_key(&key)
    }

    /// The accessibility template for a content type, falling back to the
    /// `general` template (guaranteed present by validation).
    pub fn template(&self, content_type: ContentType) -> &str {
        self.accessibility_templates
            .get(&content_type)
            .or_else(|| self.accessibility_templates.get(&ContentType::General))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Number of jargon replacement entries
    pub fn jargon_len(&self) -> usize {
        self.jargon_replacements.len()
    }

    /// Number of government plain-language entries
    pub fn gov_terms_len(&self) -> usize {
        self.gov_plain_terms.len()
    }
}

/// Lowercase all keys, rejecting collisions introduced by normalization.
fn normalize_table(raw: HashMap<String, String>, table: &str) -> Result<HashMap<String, String>> {
    let mut normalized = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let folded = key.trim().to_ascii_lowercase();
        if folded.is_empty() {
            return Err(ClarityError::RuleTable(format!(
                "{table} table contains an empty key"
            )));
        }
        if normalized.insert(folded.clone(), value).is_some() {
            return Err(ClarityError::RuleTable(format!(
                "{table} table has duplicate key after normalization: {folded}"
            )));
        }
    }
    Ok(normalized)
}

/// Write the default rule documents into a directory, for site-specific
/// editing. Creates the directory if needed.
pub fn write_default_rules(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join("jargon.json"), DEFAULT_JARGON)?;
    std::fs::write(dir.join("gov_terms.json"), DEFAULT_GOV_TERMS)?;
    std::fs::write(dir.join("accessibility.json"), DEFAULT_TEMPLATES)?;
    Ok(())
}
