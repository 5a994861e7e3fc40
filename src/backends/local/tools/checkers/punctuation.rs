// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;

use super::rules::{Detector, Fix, RegexRule};
use super::{checker_hints, input_text, run_detectors};
use crate::errors::ToolError;
use crate::model::{IssueKind, ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};

const MISSING_APOSTROPHES: &[(&str, &str)] = &[
    ("dont", "don't"),
    ("doesnt", "doesn't"),
    ("didnt", "didn't"),
    ("cant", "can't"),
    ("wont", "won't"),
    ("isnt", "isn't"),
    ("arent", "aren't"),
    ("wasnt", "wasn't"),
    ("werent", "weren't"),
    ("couldnt", "couldn't"),
    ("shouldnt", "shouldn't"),
    ("wouldnt", "wouldn't"),
    ("im", "I'm"),
    ("ive", "I've"),
    ("youre", "you're"),
    ("theyre", "they're"),
    ("thats", "that's"),
];

static DETECTORS: Lazy<Vec<Box<dyn Detector>>> = Lazy::new(|| {
    vec![
        Box::new(RegexRule::new(
            IssueKind::Spacing,
            r"[ \t]+([,.;:!?])",
            Fix::Template("$1"),
            "Remove the space before punctuation",
        )),
        Box::new(RegexRule::new(
            IssueKind::Spacing,
            r",([A-Za-z])",
            Fix::Template(", $1"),
            "Add a space after the comma",
        )),
        Box::new(RegexRule::new(
            IssueKind::Spacing,
            r"  +",
            Fix::Template(" "),
            "Use a single space between words",
        )),
        Box::new(RegexRule::new(
            IssueKind::Punctuation,
            r"!{2,}",
            Fix::Template("!"),
            "Use a single exclamation mark",
        )),
        Box::new(RegexRule::new(
            IssueKind::Punctuation,
            r"\?{2,}",
            Fix::Template("?"),
            "Use a single question mark",
        )),
        Box::new(RegexRule::new(
            IssueKind::Punctuation,
            r",{2,}",
            Fix::Template(","),
            "Use a single comma",
        )),
        Box::new(RegexRule::new(
            IssueKind::Punctuation,
            r"\.{4,}",
            Fix::Template("..."),
            "An ellipsis has three dots",
        )),
        Box::new(RegexRule::lookup(
            IssueKind::Punctuation,
            MISSING_APOSTROPHES,
            "This contraction needs an apostrophe",
        )),
        Box::new(RegexRule::on_group(
            IssueKind::Punctuation,
            r"([A-Za-z0-9])\s*\z",
            1,
            Fix::Template("$1."),
            "End the text with punctuation",
        )),
    ]
});

/// Spacing, repeated marks, missing apostrophes and a missing final stop.
pub struct PunctuationChecker;

impl PunctuationChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PunctuationChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for PunctuationChecker {
    fn name(&self) -> &'static str {
        "punctuation_checker"
    }

    fn description(&self) -> &'static str {
        "Finds spacing and punctuation mistakes"
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
        checker_hints("Punctuation Check")
    }
}
