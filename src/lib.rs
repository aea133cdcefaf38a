// SPDX-License-Identifier: PMPL-1.0-or-later
//! Claritybot - Plain-Language & Accessibility Compliance Bot
//!
//! Claritybot scores natural-language text against plain-language and
//! Section 508 style accessibility criteria, and can drive a two-stage
//! remediation pipeline around an external text generator: enhance the
//! prompt before generation, then validate and fix the output after.
//!
//! ## Philosophy
//!
//! Plain language is not optional. Rule tables are data, not code. Scores
//! are deterministic: the same text always produces the same report.
//!
//! ## Analyzers
//!
//! - **Readability**: Flesch-Kincaid grade level, Flesch Reading Ease,
//!   Gunning Fog, SMOG
//! - **Jargon**: rule-table term matching, undefined-acronym detection,
//!   complex-word ratio
//! - **Tone**: sentiment neutrality, subjectivity, passive voice,
//!   formality
//!
//! ## Pipeline
//!
//! - **Stage 1**: inject content-type accessibility instructions into the
//!   prompt
//! - **Stage 2**: score the generated output; below threshold, run a
//!   bounded validate→fix loop and keep the best candidate

pub mod analyzers;
pub mod engine;
pub mod error;
pub mod inject;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod scanner;
