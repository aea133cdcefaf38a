// SPDX-License-Identifier: PMPL-1.0-or-later
//! Claritybot CLI - Plain-Language & Accessibility Compliance Bot

use claritybot::engine::ComplianceEngine;
use claritybot::pipeline::{PipelineConfig, PipelineOrchestrator, RuleBasedFixer};
use claritybot::report::{render_pipeline_result, render_report, OutputFormat};
use claritybot::rules::{self, ContentType, RuleSet};
use claritybot::scanner;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Plain-language and accessibility compliance bot
#[derive(Parser)]
#[command(name = "claritybot")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single text file for compliance
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Target reading grade level
        #[arg(long, default_value_t = 8.0)]
        grade: f64,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Directory with custom rule tables (jargon.json, gov_terms.json,
        /// accessibility.json); embedded defaults when omitted
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Scan a directory of text files
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Target reading grade level
        #[arg(long, default_value_t = 8.0)]
        grade: f64,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Directory with custom rule tables
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Run the validate→fix loop over a text file with the rule-based fixer
    Optimize {
        /// File to optimize
        file: PathBuf,

        /// Target reading grade level
        #[arg(long, default_value_t = 8.0)]
        grade: f64,

        /// Minimum passing score
        #[arg(long, default_value_t = 70.0)]
        threshold: f64,

        /// Maximum fix attempts
        #[arg(long, default_value_t = 2)]
        max_attempts: usize,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Directory with custom rule tables
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Enhance a prompt with accessibility instructions (pipeline Stage 1)
    Enhance {
        /// File holding the prompt
        file: PathBuf,

        /// Content type the generator will produce
        #[arg(long, default_value = "general")]
        content_type: ContentTypeArg,

        /// Prepend the plain-language directive
        #[arg(long)]
        strict: bool,

        /// Directory with custom rule tables
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Write the default rule tables to a directory for editing
    InitRules {
        /// Destination directory
        #[arg(default_value = "rules")]
        dir: PathBuf,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Content type CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ContentTypeArg {
    Images,
    Multimedia,
    Documents,
    Links,
    Forms,
    General,
}

impl From<ContentTypeArg> for ContentType {
    fn from(arg: ContentTypeArg) -> Self {
        match arg {
            ContentTypeArg::Images => ContentType::Images,
            ContentTypeArg::Multimedia => ContentType::Multimedia,
            ContentTypeArg::Documents => ContentType::Documents,
            ContentTypeArg::Links => ContentType::Links,
            ContentTypeArg::Forms => ContentType::Forms,
            ContentTypeArg::General => ContentType::General,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("claritybot=debug")
    } else {
        EnvFilter::new("claritybot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_rules(dir: Option<&Path>) -> anyhow::Result<Arc<RuleSet>> {
    let rules = match dir {
        Some(dir) => RuleSet::load(
            &dir.join("jargon.json"),
            &dir.join("gov_terms.json"),
            &dir.join("accessibility.json"),
        )?,
        None => RuleSet::defaults()?,
    };
    Ok(Arc::new(rules))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, grade, format, rules, output, verbose } => {
            init_logging(verbose);
            let engine = ComplianceEngine::new(load_rules(rules.as_deref())?);
            let report = scanner::scan_file(&engine, &file, grade)?;
            let rendered = render_report(&report, format.into());
            write_output(&rendered, output.as_deref())?;

            if !report.passes_compliance {
                std::process::exit(1);
            }
        }

        Commands::Check { dir, grade, format, rules, verbose } => {
            init_logging(verbose);
            let engine = ComplianceEngine::new(load_rules(rules.as_deref())?);
            let reports = scanner::scan_directory(&engine, &dir, grade)?;

            match OutputFormat::from(format) {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&reports)?);
                }
                OutputFormat::Text => {
                    for file_report in &reports {
                        println!(
                            "{}: {:.1}/100 {}",
                            file_report.path.display(),
                            file_report.report.overall_score,
                            if file_report.report.passes_compliance { "PASS" } else { "FAIL" }
                        );
                    }
                    println!(
                        "\n{} file(s), {} non-compliant",
                        reports.len(),
                        reports.iter().filter(|r| !r.report.passes_compliance).count()
                    );
                }
            }

            if reports.iter().any(|r| !r.report.passes_compliance) {
                std::process::exit(1);
            }
        }

        Commands::Optimize { file, grade, threshold, max_attempts, format, rules, verbose } => {
            init_logging(verbose);
            let rules = load_rules(rules.as_deref())?;
            let config = PipelineConfig {
                threshold,
                max_attempts,
                target_grade: grade,
                ..PipelineConfig::default()
            };
            let orchestrator = PipelineOrchestrator::new(rules.clone(), config);
            let fixer = RuleBasedFixer::new(rules);

            let text = std::fs::read_to_string(&file)?;
            let result = orchestrator.optimize(&text, &fixer).await?;
            println!("{}", render_pipeline_result(&result, format.into()));

            let passed = result
                .history
                .last()
                .map(|r| r.overall_score >= threshold)
                .unwrap_or(false);
            if !passed {
                std::process::exit(1);
            }
        }

        Commands::Enhance { file, content_type, strict, rules, verbose } => {
            init_logging(verbose);
            let orchestrator = PipelineOrchestrator::with_defaults(load_rules(rules.as_deref())?);
            let prompt = std::fs::read_to_string(&file)?;
            println!("{}", orchestrator.enhance_prompt(&prompt, content_type.into(), strict));
        }

        Commands::InitRules { dir } => {
            rules::write_default_rules(&dir)?;
            eprintln!("Default rule tables written to {}", dir.display());
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
