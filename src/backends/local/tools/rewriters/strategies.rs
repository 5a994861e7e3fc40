// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use std::collections::HashMap;

use crate::utils::{capitalize_first, lowercase_first, match_case};

/// Case-insensitive whole-word phrase replacement table.
///
/// Every key is matched as one alternation so a single pass never rewrites
/// its own output. Replacements inherit the casing of the matched text.
pub struct PhraseTable {
    pattern: Regex,
    replacements: HashMap<String, Vec<&'static str>>,
}

impl PhraseTable {
    pub fn new(entries: &[(&'static str, &[&'static str])]) -> Self {
        // longer phrases first so "a lot of" wins over "a"
        let mut keys: Vec<&str> = entries.iter().map(|(key, _)| *key).collect();
        keys.sort_by_key(|key| std::cmp::Reverse(key.len()));
        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()
            .expect("phrase table pattern is valid");

        Self {
            pattern,
            replacements: entries
                .iter()
                .map(|(key, options)| (key.to_lowercase(), options.to_vec()))
                .collect(),
        }
    }

    /// Replace every listed phrase with its `variant`-th alternative,
    /// cycling when a phrase has fewer alternatives.
    pub fn apply(&self, text: &str, variant: usize) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                match self.replacements.get(&matched.to_lowercase()) {
                    Some(options) if !options.is_empty() => {
                        match_case(matched, options[variant % options.len()])
                    }
                    _ => matched.to_string(),
                }
            })
            .into_owned()
    }
}

const SYNONYM_ENTRIES: &[(&str, &[&str])] = &[
    ("big", &["large", "huge", "sizable"]),
    ("small", &["little", "compact", "minor"]),
    ("good", &["great", "fine", "excellent"]),
    ("bad", &["poor", "unfavorable", "weak"]),
    ("important", &["significant", "crucial", "essential"]),
    ("use", &["utilize", "employ", "apply"]),
    ("help", &["assist", "aid", "support"]),
    ("show", &["demonstrate", "reveal", "display"]),
    ("make", &["create", "produce", "build"]),
    ("think", &["believe", "consider", "suppose"]),
    ("fast", &["quick", "rapid", "swift"]),
    ("start", &["begin", "commence", "launch"]),
    ("end", &["finish", "conclude", "complete"]),
    ("many", &["numerous", "several", "countless"]),
    ("often", &["frequently", "regularly", "commonly"]),
    ("easy", &["simple", "straightforward", "effortless"]),
    ("hard", &["difficult", "challenging", "tough"]),
    ("change", &["alter", "modify", "adjust"]),
    ("get", &["obtain", "acquire", "gain"]),
    ("need", &["require", "want", "lack"]),
    ("happy", &["glad", "pleased", "cheerful"]),
    ("problem", &["issue", "difficulty", "challenge"]),
    ("idea", &["concept", "notion", "thought"]),
    ("people", &["individuals", "folks", "persons"]),
    ("buy", &["purchase", "acquire", "pick up"]),
    ("quickly", &["rapidly", "swiftly", "promptly"]),
    ("very", &["extremely", "highly", "really"]),
];

static SYNONYMS: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(SYNONYM_ENTRIES));

const TENSE_ENTRIES: &[(&str, &[&str])] = &[
    ("is", &["was"]),
    ("are", &["were"]),
    ("was", &["is"]),
    ("were", &["are"]),
    ("has", &["had"]),
    ("have", &["had"]),
    ("had", &["has"]),
    ("does", &["did"]),
    ("do", &["did"]),
    ("did", &["does"]),
    ("will", &["would"]),
    ("would", &["will"]),
    ("can", &["could"]),
    ("could", &["can"]),
];

static TENSE_MARKERS: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(TENSE_ENTRIES));

const CONTRACTION_ENTRIES: &[(&str, &[&str])] = &[
    ("don't", &["do not"]),
    ("doesn't", &["does not"]),
    ("didn't", &["did not"]),
    ("can't", &["cannot"]),
    ("won't", &["will not"]),
    ("isn't", &["is not"]),
    ("aren't", &["are not"]),
    ("wasn't", &["was not"]),
    ("weren't", &["were not"]),
    ("couldn't", &["could not"]),
    ("shouldn't", &["should not"]),
    ("wouldn't", &["would not"]),
    ("it's", &["it is"]),
    ("that's", &["that is"]),
    ("there's", &["there is"]),
    ("i'm", &["I am"]),
    ("you're", &["you are"]),
    ("we're", &["we are"]),
    ("they're", &["they are"]),
    ("i've", &["I have"]),
    ("we've", &["we have"]),
    ("let's", &["let us"]),
    ("a lot of", &["many"]),
    ("kids", &["children"]),
    ("stuff", &["material"]),
    ("gonna", &["going to"]),
    ("wanna", &["want to"]),
];

static CONTRACTIONS: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(CONTRACTION_ENTRIES));

const FILLER_ENTRIES: &[(&str, &[&str])] = &[
    ("in order to", &["to"]),
    ("due to the fact that", &["because"]),
    ("at this point in time", &["now"]),
    ("in the event that", &["if"]),
    ("for the purpose of", &["for"]),
    ("a large number of", &["many"]),
];

static FILLERS: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(FILLER_ENTRIES));

static FILLER_WORDS: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\b(?:very|really|just|basically|actually|quite|literally)\b,?\s+")
        .case_insensitive(true)
        .build()
        .expect("filler pattern is valid")
});

static TERMINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+$").expect("terminal punctuation pattern is valid"));

/// One rewrite step applied to a single sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Synonym table lookup; the index picks among alternatives.
    Synonyms(usize),
    /// Swap the clauses around the first comma.
    ReorderClauses,
    /// Present ↔ past auxiliary swap.
    TenseSwap,
    /// Expand contractions and informal words.
    Formalize,
    /// Drop filler words and wordy phrases.
    Condense,
}

impl Strategy {
    pub fn apply(&self, sentence: &str) -> String {
        match self {
            Strategy::Synonyms(variant) => SYNONYMS.apply(sentence, *variant),
            Strategy::ReorderClauses => reorder_clauses(sentence),
            Strategy::TenseSwap => TENSE_MARKERS.apply(sentence, 0),
            Strategy::Formalize => CONTRACTIONS.apply(sentence, 0),
            Strategy::Condense => {
                let condensed = FILLERS.apply(sentence, 0);
                let trimmed = FILLER_WORDS.replace_all(&condensed, "");
                // removing a leading filler leaves a lowercase start
                if sentence.starts_with(|c: char| c.is_uppercase()) {
                    capitalize_first(&trimmed)
                } else {
                    trimmed.into_owned()
                }
            }
        }
    }
}

/// "If it rains, we stay inside." → "We stay inside, if it rains."
///
/// Sentences with no comma, or with a clause of fewer than two words on
/// either side, are returned unchanged.
fn reorder_clauses(sentence: &str) -> String {
    let Some((head, tail)) = sentence.split_once(',') else {
        return sentence.to_string();
    };

    let terminal = TERMINAL.find(tail).map(|m| m.as_str()).unwrap_or("");
    let tail = tail[..tail.len() - terminal.len()].trim();
    let head = head.trim();

    if head.split_whitespace().count() < 2 || tail.split_whitespace().count() < 2 {
        return sentence.to_string();
    }

    format!(
        "{}, {}{}",
        capitalize_first(tail),
        lower_unless_pronoun(head),
        terminal
    )
}

fn lower_unless_pronoun(clause: &str) -> String {
    let first = clause.split_whitespace().next().unwrap_or_default();
    let is_pronoun_i = first == "I" || first.starts_with("I'");
    let is_acronym = first.len() > 1 && first.chars().all(|c| !c.is_lowercase());
    if is_pronoun_i || is_acronym {
        clause.to_string()
    } else {
        lowercase_first(clause)
    }
}
