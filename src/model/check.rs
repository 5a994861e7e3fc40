// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

use crate::errors::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Punctuation,
    Spacing,
    Capitalization,
    Grammar,
    Style,
    Usage,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueKind::Punctuation => "punctuation",
            IssueKind::Spacing => "spacing",
            IssueKind::Capitalization => "capitalization",
            IssueKind::Grammar => "grammar",
            IssueKind::Style => "style",
            IssueKind::Usage => "usage",
        };
        f.write_str(label)
    }
}

/// One detected pattern match in checked text.
///
/// `start..end` is a byte range into the text the issue was detected in, and
/// `text` is exactly that slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub text: String,
    pub suggestion: String,
    pub explanation: String,
    pub start: usize,
    pub end: usize,
}

impl Issue {
    fn overlaps(&self, other: &Issue) -> bool {
        self.start < other.end && other.start < self.end
    }

    fn shifted(&self, delta: isize) -> Issue {
        Issue {
            start: self.start.saturating_add_signed(delta),
            end: self.end.saturating_add_signed(delta),
            ..self.clone()
        }
    }
}

/// Checked text plus the issues found in it.
///
/// Issues are sorted by `start` and pairwise disjoint. When detectors report
/// overlapping spans the earliest one wins (ties go to the detector that ran
/// first), so applying a correction never invalidates another issue's offsets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    text: String,
    issues: Vec<Issue>,
}

impl CheckReport {
    pub fn new(text: impl Into<String>, mut detected: Vec<Issue>) -> Self {
        let text = text.into();
        // stable: equal starts keep detector order
        detected.sort_by_key(|issue| issue.start);

        let mut issues: Vec<Issue> = Vec::with_capacity(detected.len());
        for issue in detected {
            let well_formed = issue.start < issue.end
                && text.get(issue.start..issue.end) == Some(issue.text.as_str())
                && issue.suggestion != issue.text;
            if !well_formed {
                continue;
            }
            if issues.last().is_some_and(|kept| kept.overlaps(&issue)) {
                continue;
            }
            issues.push(issue);
        }

        Self { text, issues }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Apply the suggestion of issue `index`.
    ///
    /// The returned report has that issue removed and every later issue moved
    /// by the change in length, so each remaining issue still points at its
    /// own text.
    pub fn apply(&self, index: usize) -> Result<CheckReport, ToolError> {
        let target = self.issues.get(index).ok_or_else(|| {
            ToolError::range(format!(
                "Issue {} does not exist ({} issues found)",
                index + 1,
                self.issues.len()
            ))
        })?;

        let mut text = String::with_capacity(self.text.len() + target.suggestion.len());
        text.push_str(&self.text[..target.start]);
        text.push_str(&target.suggestion);
        text.push_str(&self.text[target.end..]);

        let delta = target.suggestion.len() as isize - (target.end - target.start) as isize;
        let issues = self
            .issues
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, issue)| {
                if issue.start >= target.end {
                    issue.shifted(delta)
                } else {
                    issue.clone()
                }
            })
            .collect();

        Ok(CheckReport { text, issues })
    }

    /// Text with every suggestion applied.
    pub fn apply_all(&self) -> String {
        let mut text = self.text.clone();
        for issue in self.issues.iter().rev() {
            text.replace_range(issue.start..issue.end, &issue.suggestion);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(text: &str, needle: &str, suggestion: &str, kind: IssueKind) -> Issue {
        let start = text.find(needle).expect("needle present");
        Issue {
            kind,
            text: needle.to_string(),
            suggestion: suggestion.to_string(),
            explanation: String::new(),
            start,
            end: start + needle.len(),
        }
    }

    #[test]
    fn apply_removes_one_issue_and_keeps_others_aligned() {
        let text = "i think its fine , and we was done";
        let issues = vec![
            issue(text, "i", "I", IssueKind::Capitalization),
            issue(text, " ,", ",", IssueKind::Spacing),
            issue(text, "we was", "we were", IssueKind::Grammar),
        ];
        let report = CheckReport::new(text, issues);
        assert_eq!(report.issues().len(), 3);

        let fixed = report.apply(1).unwrap();
        assert_eq!(fixed.text(), "i think its fine, and we was done");
        assert_eq!(fixed.issues().len(), 2);
        for remaining in fixed.issues() {
            assert_eq!(&fixed.text()[remaining.start..remaining.end], remaining.text);
        }
    }

    #[test]
    fn overlapping_issues_keep_the_earliest() {
        let text = "hello  ,world";
        let issues = vec![
            issue(text, " ,", ",", IssueKind::Spacing),
            issue(text, "  ", " ", IssueKind::Spacing),
        ];
        let report = CheckReport::new(text, issues);
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].text, "  ");
    }

    #[test]
    fn malformed_and_noop_issues_are_dropped() {
        let text = "abc";
        let bad_offsets = Issue {
            kind: IssueKind::Style,
            text: "zz".into(),
            suggestion: "z".into(),
            explanation: String::new(),
            start: 0,
            end: 2,
        };
        let noop = issue(text, "b", "b", IssueKind::Style);
        assert!(CheckReport::new(text, vec![bad_offsets, noop]).is_clean());
    }

    #[test]
    fn apply_out_of_range_is_an_error() {
        let report = CheckReport::new("fine.", vec![]);
        assert!(matches!(report.apply(0), Err(ToolError::Range(_))));
    }

    #[test]
    fn apply_all_fixes_everything() {
        let text = "he dont know , i think";
        let issues = vec![
            issue(text, "dont", "don't", IssueKind::Punctuation),
            issue(text, " ,", ",", IssueKind::Spacing),
            issue(text, "i think", "I think", IssueKind::Capitalization),
        ];
        let report = CheckReport::new(text, issues);
        assert_eq!(report.apply_all(), "he don't know, I think");
    }
}
