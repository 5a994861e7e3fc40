// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sentence-level rewriters.
//!
//! Each rewriter is a named list of [`Strategy`] steps. Input is split into
//! sentences, every sentence runs through the steps in order, and the result
//! is rejoined with single spaces and scored against the input.

pub mod paraphraser;
pub mod rewording;
pub mod sentence_changer;
pub mod similarity;
pub mod strategies;

pub use paraphraser::Paraphraser;
pub use rewording::RewordingTool;
pub use sentence_changer::SentenceChanger;
pub use strategies::Strategy;

use crate::model::TransformResult;
use crate::utils::split_sentences;

/// Run `strategies` over every sentence of `text` and score the outcome.
pub fn rewrite(text: &str, strategies: &[Strategy]) -> TransformResult {
    let rewritten = split_sentences(text)
        .into_iter()
        .map(|sentence| {
            strategies
                .iter()
                .fold(sentence.to_string(), |acc, strategy| strategy.apply(&acc))
        })
        .collect::<Vec<_>>()
        .join(" ");

    TransformResult::Rewrite {
        similarity: similarity::similarity(text, &rewritten),
        text: rewritten,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_rejoined_with_single_spaces() {
        let result = rewrite("It is big.   It is fast!", &[Strategy::Synonyms(0)]);
        assert_eq!(result.as_text(), Some("It is large. It is quick!"));
    }

    #[test]
    fn no_strategies_keeps_text() {
        let result = rewrite("Nothing changes here.", &[]);
        assert_eq!(
            result,
            TransformResult::Rewrite {
                text: "Nothing changes here.".into(),
                similarity: 100
            }
        );
    }
}
