// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for claritybot

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, ClarityError>;

/// Main error type for claritybot
#[derive(Error, Debug)]
pub enum ClarityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rule table error: {0}")]
    RuleTable(String),

    #[error("Unknown content type key in accessibility templates: {0}")]
    UnknownContentType(String),

    #[error("Generation call failed on attempt {attempt}: {source}")]
    Generation {
        attempt: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("Fix call failed on attempt {attempt}: {source}")]
    Fix {
        attempt: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("External call timed out after {0:?}")]
    Timeout(std::time::Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_stage_and_attempt() {
        let err = ClarityError::Generation {
            attempt: 1,
            source: anyhow::anyhow!("connection refused"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Generation"));
        assert!(msg.contains("attempt 1"));
    }

    #[test]
    fn test_rule_table_error_display() {
        let err = ClarityError::RuleTable("duplicate key: utilize".to_string());
        assert!(err.to_string().contains("duplicate key"));
    }
}
