// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in tool catalog, grouped by category.

pub mod calculators;
pub mod checkers;
pub mod generators;
pub mod keyword_research;
pub mod rewriters;

pub use calculators::{
    AgeCalculator, BmiCalculator, ConfidenceIntervalCalculator, LoanCalculator, MarginCalculator,
    PercentageCalculator,
};
pub use checkers::{GrammarChecker, PunctuationChecker, SentenceChecker};
pub use generators::{EssayWriter, LogoMaker, ParagraphWriter};
pub use keyword_research::KeywordResearch;
pub use rewriters::{Paraphraser, RewordingTool, SentenceChanger};
