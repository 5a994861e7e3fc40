// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rule-based text checkers.
//!
//! A checker is an ordered list of [`Detector`]s. Every detector sees the
//! original text, and their combined issues go through
//! [`CheckReport::new`], which keeps the earliest of any overlapping spans.

pub mod grammar;
pub mod punctuation;
pub mod rules;
pub mod sentence;

pub use grammar::GrammarChecker;
pub use punctuation::PunctuationChecker;
pub use rules::Detector;
pub use sentence::SentenceChecker;

use crate::errors::ToolError;
use crate::model::{CheckReport, ToolParameters, TransformResult};
use crate::traits::RenderHints;

pub(crate) const MISSING_TEXT: &str = "Please enter some text to check";

pub(crate) fn input_text(params: &ToolParameters) -> Result<&str, ToolError> {
    params.required_text("text", MISSING_TEXT)
}

pub(crate) fn run_detectors(text: &str, detectors: &[Box<dyn Detector>]) -> TransformResult {
    let issues = detectors
        .iter()
        .flat_map(|detector| detector.detect(text))
        .collect();
    TransformResult::Check(CheckReport::new(text, issues))
}

pub(crate) fn checker_hints(title: &'static str) -> RenderHints {
    RenderHints {
        title,
        ..RenderHints::default()
    }
}
