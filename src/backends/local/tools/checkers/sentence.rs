// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;

use super::rules::{Detector, Fix, LongSentenceDetector, RegexRule};
use super::{checker_hints, input_text, run_detectors};
use crate::errors::ToolError;
use crate::model::{IssueKind, ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};

const MAX_SENTENCE_WORDS: usize = 30;

static DETECTORS: Lazy<Vec<Box<dyn Detector>>> = Lazy::new(|| {
    vec![
        Box::new(RegexRule::on_group(
            IssueKind::Capitalization,
            r"(?:^|[.!?]\s+)([a-z])",
            1,
            Fix::Uppercase,
            "Start each sentence with a capital letter",
        )),
        Box::new(RegexRule::on_group(
            IssueKind::Capitalization,
            r"\b(i)(?:\s|'|,|$)",
            1,
            Fix::Uppercase,
            "The pronoun \"I\" is always capitalized",
        )),
        Box::new(RegexRule::new(
            IssueKind::Spacing,
            r"([a-z]{2})([.!?])([A-Z])",
            Fix::Template("$1$2 $3"),
            "Add a space after the end of a sentence",
        )),
        Box::new(LongSentenceDetector {
            max_words: MAX_SENTENCE_WORDS,
        }),
    ]
});

/// Sentence-level capitalization, spacing and length.
pub struct SentenceChecker;

impl SentenceChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SentenceChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for SentenceChecker {
    fn name(&self) -> &'static str {
        "sentence_checker"
    }

    fn description(&self) -> &'static str {
        "Checks sentence capitalization, spacing and length"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Checker
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        input_text(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let text = input_text(params)?;
        Ok(run_detectors(text, &DETECTORS))
    }

    fn render_hints(&self) -> RenderHints {
        checker_hints("Sentence Check")
    }
}
