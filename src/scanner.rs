// SPDX-License-Identifier: PMPL-1.0-or-later
//! Directory scanner for analyzing text files across a project.
//!
//! Walks directory trees, identifies text content, and scores each file
//! with the compliance engine.

use crate::engine::{ComplianceEngine, ComplianceReport};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// Directories to skip
const SKIP_DIRS: &[&str] = &[
    "node_modules", ".git", "target", "dist", "build", "_build", "vendor", "coverage",
];

/// Compliance report for one scanned file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    pub report: ComplianceReport,
}

/// Scan a directory, scoring every text file against the target grade.
pub fn scan_directory(
    engine: &ComplianceEngine,
    dir: &Path,
    target_grade: f64,
) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();

    info!("Scanning directory: {}", dir.display());

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden and excluded directories
            let name = e.file_name().to_str().unwrap_or("");
            if e.file_type().is_dir() {
                return !SKIP_DIRS.contains(&name) && !name.starts_with('.');
            }
            true
        })
    {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        if !SCANNABLE_EXTENSIONS.contains(&ext) {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                info!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        reports.push(FileReport {
            path: path.to_path_buf(),
            report: engine.analyze(&content, target_grade),
        });
    }

    let failing = reports.iter().filter(|r| !r.report.passes_compliance).count();
    info!(
        "Scanned {} files, {} non-compliant",
        reports.len(),
        failing
    );

    Ok(reports)
}

/// Analyze a single file
pub fn scan_file(engine: &ComplianceEngine, path: &Path, target_grade: f64) -> Result<ComplianceReport> {
    let content = std::fs::read_to_string(path)?;
    Ok(engine.analyze(&content, target_grade))
}
