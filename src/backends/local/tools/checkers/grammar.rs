// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;

use super::rules::{ArticleDetector, Detector, RegexRule, RepeatedWordDetector};
use super::{checker_hints, input_text, run_detectors};
use crate::errors::ToolError;
use crate::model::{IssueKind, ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};

const AGREEMENT: &[(&str, &str)] = &[
    ("he don't", "he doesn't"),
    ("she don't", "she doesn't"),
    ("it don't", "it doesn't"),
    ("we was", "we were"),
    ("they was", "they were"),
    ("you was", "you were"),
    ("i is", "I am"),
    ("he have", "he has"),
    ("she have", "she has"),
    ("it have", "it has"),
    ("there is many", "there are many"),
    ("could of", "could have"),
    ("should of", "should have"),
    ("would of", "would have"),
    ("must of", "must have"),
];

const CONFUSED: &[(&str, &str)] = &[
    ("alot", "a lot"),
    ("your welcome", "you're welcome"),
    ("its a", "it's a"),
    ("irregardless", "regardless"),
    ("could care less", "couldn't care less"),
    ("less people", "fewer people"),
    ("then ever", "than ever"),
    ("more then", "more than"),
];

static DETECTORS: Lazy<Vec<Box<dyn Detector>>> = Lazy::new(|| {
    vec![
        Box::new(RegexRule::lookup(
            IssueKind::Grammar,
            AGREEMENT,
            "The verb does not agree with its subject",
        )),
        Box::new(ArticleDetector),
        Box::new(RegexRule::lookup(
            IssueKind::Usage,
            CONFUSED,
            "Commonly confused words",
        )),
        Box::new(RepeatedWordDetector),
    ]
});

/// Subject-verb agreement, articles, confused words and repeated words.
pub struct GrammarChecker;

impl GrammarChecker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GrammarChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for GrammarChecker {
    fn name(&self) -> &'static str {
        "grammar_checker"
    }

    fn description(&self) -> &'static str {
        "Flags agreement errors, wrong articles and commonly confused words"
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
        checker_hints("Grammar Check")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> crate::model::CheckReport {
        GrammarChecker::new()
            .transform(&ToolParameters::new().with_text("text", text))
            .unwrap()
            .as_check()
            .cloned()
            .unwrap()
    }

    #[test]
    fn detects_each_rule_family() {
        let report = report("They was late and he don't care. It was a honest mistake, alot of the the time.");
        let found: Vec<_> = report
            .issues()
            .iter()
            .map(|i| (i.kind, i.text.as_str(), i.suggestion.as_str()))
            .collect();

        assert_eq!(
            found,
            vec![
                (IssueKind::Grammar, "They was", "They were"),
                (IssueKind::Grammar, "he don't", "he doesn't"),
                (IssueKind::Grammar, "a", "an"),
                (IssueKind::Usage, "alot", "a lot"),
                (IssueKind::Usage, "the the", "the"),
            ]
        );
    }

    #[test]
    fn sequential_fixes_reach_clean_text() {
        let mut report = report("We was there. It was a apple.");
        while !report.is_clean() {
            report = report.apply(0).unwrap();
        }
        assert_eq!(report.text(), "We were there. It was an apple.");
    }

    #[test]
    fn apply_beyond_last_issue() {
        let report = report("Fine text.");
        assert!(report.is_clean());
        let err = report.apply(0).unwrap_err();
        assert_eq!(err.user_message(), "Issue 1 does not exist (0 issues found)");
    }
}
