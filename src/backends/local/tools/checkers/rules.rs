// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use crate::model::{Issue, IssueKind};
use crate::utils::{match_case, split_sentences};

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").expect("word pattern is valid"));

/// One independent pass over the checked text.
///
/// Detectors report offsets into the text they were given and never look at
/// each other's output; overlap between detectors is resolved by
/// [`CheckReport::new`](crate::model::CheckReport::new).
pub trait Detector: Send + Sync {
    fn detect(&self, text: &str) -> Vec<Issue>;
}

/// How a [`RegexRule`] turns the flagged span into a suggestion.
pub enum Fix {
    /// `$n` references to the rule's capture groups.
    Template(&'static str),
    Uppercase,
    /// Case-insensitive lookup; the replacement takes the casing of the match.
    Lookup(&'static [(&'static str, &'static str)]),
}

/// Declarative pattern rule.
///
/// Flags capture group `group` of every match (0 for the whole match).
pub struct RegexRule {
    kind: IssueKind,
    pattern: Regex,
    group: usize,
    fix: Fix,
    explanation: &'static str,
}

impl RegexRule {
    /// Rules are compiled from constant patterns, so an invalid one is a
    /// programming error.
    pub fn new(kind: IssueKind, pattern: &str, fix: Fix, explanation: &'static str) -> Self {
        Self::build(kind, pattern, 0, fix, explanation, false)
    }

    pub fn on_group(
        kind: IssueKind,
        pattern: &str,
        group: usize,
        fix: Fix,
        explanation: &'static str,
    ) -> Self {
        Self::build(kind, pattern, group, fix, explanation, false)
    }

    pub fn lookup(
        kind: IssueKind,
        table: &'static [(&'static str, &'static str)],
        explanation: &'static str,
    ) -> Self {
        let alternation = table
            .iter()
            .map(|(from, _)| regex::escape(from))
            .collect::<Vec<_>>()
            .join("|");
        Self::build(
            kind,
            &format!(r"\b(?:{})\b", alternation),
            0,
            Fix::Lookup(table),
            explanation,
            true,
        )
    }

    fn build(
        kind: IssueKind,
        pattern: &str,
        group: usize,
        fix: Fix,
        explanation: &'static str,
        case_insensitive: bool,
    ) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .expect("rule pattern is valid");
        Self {
            kind,
            pattern,
            group,
            fix,
            explanation,
        }
    }

    fn suggestion(&self, caps: &Captures, flagged: &str) -> Option<String> {
        match &self.fix {
            Fix::Template(template) => {
                let mut expanded = String::new();
                caps.expand(template, &mut expanded);
                Some(expanded)
            }
            Fix::Uppercase => Some(flagged.to_uppercase()),
            Fix::Lookup(table) => table
                .iter()
                .find(|(from, _)| from.eq_ignore_ascii_case(flagged))
                .map(|(_, to)| match_case(flagged, to)),
        }
    }
}

impl Detector for RegexRule {
    fn detect(&self, text: &str) -> Vec<Issue> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let flagged = caps.get(self.group)?;
                let suggestion = self.suggestion(&caps, flagged.as_str())?;
                Some(Issue {
                    kind: self.kind,
                    text: flagged.as_str().to_string(),
                    suggestion,
                    explanation: self.explanation.to_string(),
                    start: flagged.start(),
                    end: flagged.end(),
                })
            })
            .collect()
    }
}

/// "the the" → "the". Only whitespace may separate the two words.
pub struct RepeatedWordDetector;

impl Detector for RepeatedWordDetector {
    fn detect(&self, text: &str) -> Vec<Issue> {
        let words: Vec<_> = WORD.find_iter(text).collect();
        words
            .windows(2)
            .filter(|pair| {
                let gap = &text[pair[0].end()..pair[1].start()];
                !gap.is_empty()
                    && gap.chars().all(char::is_whitespace)
                    && pair[0].as_str().eq_ignore_ascii_case(pair[1].as_str())
            })
            .map(|pair| Issue {
                kind: IssueKind::Usage,
                text: text[pair[0].start()..pair[1].end()].to_string(),
                suggestion: pair[0].as_str().to_string(),
                explanation: format!("The word \"{}\" is repeated", pair[0].as_str()),
                start: pair[0].start(),
                end: pair[1].end(),
            })
            .collect()
    }
}

/// Flags sentences longer than `max_words` and proposes a split at their first
/// ", and" / ", but" / ", so" joint. Long sentences without such a joint are
/// not reported, since there is no concrete suggestion to offer.
pub struct LongSentenceDetector {
    pub max_words: usize,
}

static JOINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r", (and|but|so) ").expect("joint pattern is valid"));

impl Detector for LongSentenceDetector {
    fn detect(&self, text: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for sentence in split_sentences(text) {
            let word_count = WORD.find_iter(sentence).count();
            if word_count <= self.max_words {
                continue;
            }
            // sentences are subslices of `text`
            let offset = sentence.as_ptr() as usize - text.as_ptr() as usize;
            if let Some(caps) = JOINT.captures(sentence) {
                let (Some(joint), Some(conjunction)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                issues.push(Issue {
                    kind: IssueKind::Style,
                    text: joint.as_str().to_string(),
                    suggestion: format!(". {} ", crate::utils::capitalize_first(conjunction.as_str())),
                    explanation: format!(
                        "This sentence has {} words; consider splitting it here",
                        word_count
                    ),
                    start: offset + joint.start(),
                    end: offset + joint.end(),
                });
            }
        }
        issues
    }
}

const SILENT_H: &[&str] = &["hour", "honest", "honor", "honour", "heir"];
const CONSONANT_SOUND_VOWELS: &[&str] = &["one", "once", "uni", "use", "usu", "uti", "eu", "ur"];

/// "a apple" → "an apple", "an car" → "a car", by first-letter sound.
pub struct ArticleDetector;

static ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([Aa]n?) ([A-Za-z]+)").expect("article pattern is valid"));

fn starts_with_vowel_sound(word: &str) -> bool {
    let lower = word.to_lowercase();
    if SILENT_H.iter().any(|prefix| lower.starts_with(prefix)) {
        return true;
    }
    if CONSONANT_SOUND_VOWELS.iter().any(|prefix| lower.starts_with(prefix)) {
        return false;
    }
    lower.starts_with(['a', 'e', 'i', 'o', 'u'])
}

impl Detector for ArticleDetector {
    fn detect(&self, text: &str) -> Vec<Issue> {
        ARTICLE
            .captures_iter(text)
            .filter_map(|caps| {
                let article = caps.get(1)?;
                let next = caps.get(2)?.as_str();
                let vowel = starts_with_vowel_sound(next);
                let is_an = article.as_str().len() == 2;
                let suggestion = match (is_an, vowel) {
                    (false, true) => match_case(article.as_str(), "an"),
                    (true, false) => match_case(article.as_str(), "a"),
                    _ => return None,
                };
                Some(Issue {
                    kind: IssueKind::Grammar,
                    text: article.as_str().to_string(),
                    suggestion: suggestion.clone(),
                    explanation: format!("Use \"{}\" before \"{}\"", suggestion, next),
                    start: article.start(),
                    end: article.end(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_rule_expands_groups() {
        let rule = RegexRule::new(IssueKind::Spacing, r",([A-Za-z])", Fix::Template(", $1"), "space");
        let issues = rule.detect("red,green");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, ",g");
        assert_eq!(issues[0].suggestion, ", g");
        assert_eq!((issues[0].start, issues[0].end), (3, 5));
    }

    #[test]
    fn group_rule_flags_only_the_group() {
        let rule = RegexRule::on_group(
            IssueKind::Capitalization,
            r"(?:^|[.!?]\s+)([a-z])",
            1,
            Fix::Uppercase,
            "capitalize",
        );
        let issues = rule.detect("one. two");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].text, "t");
        assert_eq!(issues[1].suggestion, "T");
        assert_eq!(issues[1].start, 5);
    }

    #[test]
    fn lookup_rule_keeps_case() {
        const TABLE: &[(&str, &str)] = &[("dont", "don't")];
        let rule = RegexRule::lookup(IssueKind::Punctuation, TABLE, "apostrophe");
        let issues = rule.detect("Dont go, we dont");
        let suggestions: Vec<_> = issues.iter().map(|i| i.suggestion.as_str()).collect();
        assert_eq!(suggestions, vec!["Don't", "don't"]);
    }

    #[test]
    fn repeated_words() {
        let issues = RepeatedWordDetector.detect("It was the the best. Best best!");
        let found: Vec<_> = issues.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(found, vec!["the the", "Best best"]);
        assert_eq!(issues[0].suggestion, "the");
        // punctuation between words is not a repeat
        assert!(RepeatedWordDetector.detect("Well. Well").is_empty());
    }

    #[test]
    fn long_sentence_split_point() {
        let detector = LongSentenceDetector { max_words: 8 };
        let text = "Short one. We walked to the market in the rain, and then we went home quite late.";
        let issues = detector.detect(text);
        assert_eq!(issues.len(), 1);
        assert_eq!(&text[issues[0].start..issues[0].end], ", and ");
        assert_eq!(issues[0].suggestion, ". And ");
    }

    #[test]
    fn articles() {
        let cases = vec![
            ("a apple", Some("an")),
            ("an car", Some("a")),
            ("a university", None),
            ("a hour", Some("an")),
            ("An orange", None),
            ("A elephant", Some("An")),
        ];
        for (text, expected) in cases {
            let issues = ArticleDetector.detect(text);
            assert_eq!(issues.first().map(|i| i.suggestion.as_str()), expected, "{text}");
        }
    }
}
