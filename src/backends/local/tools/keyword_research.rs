// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use rand::seq::SliceRandom;
use rand::Rng;

use super::generators::templates::rng_for;
use crate::errors::ToolError;
use crate::model::{ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};
use crate::utils::{format_currency, format_number};

const MIN_COUNT: f64 = 1.0;
const MAX_COUNT: f64 = 50.0;
const DEFAULT_COUNT: f64 = 10.0;

const PREFIXES: &[&str] = &[
    "best", "cheap", "free", "how to use", "what is", "top", "easy", "online", "buy", "learn",
];

const SUFFIXES: &[&str] = &[
    "for beginners",
    "near me",
    "tools",
    "examples",
    "guide",
    "tips",
    "ideas",
    "vs alternatives",
    "pricing",
    "software",
    "tutorial",
    "checklist",
    "for small business",
    "2024",
    "reviews",
];

/// Keyword idea table: seeded volumes, difficulty and cost per click.
///
/// All figures are simulated; the same keyword and seed always produce the
/// same table.
pub struct KeywordResearch {
    currency_symbol: String,
}

impl KeywordResearch {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn parse<'a>(&self, params: &'a ToolParameters) -> Result<(&'a str, usize), ToolError> {
        let keyword = params.required_text("keyword", "Please enter a keyword")?;
        let count = params.optional_number("count")?.unwrap_or(DEFAULT_COUNT);
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) || count.fract() != 0.0 {
            return Err(ToolError::range("Number of keyword ideas must be between 1 and 50"));
        }
        Ok((keyword, count as usize))
    }
}

impl Default for KeywordResearch {
    fn default() -> Self {
        Self::new(crate::config::consts::DEFAULT_CURRENCY_SYMBOL)
    }
}

/// Candidate phrases in a fixed order: the keyword itself, then every
/// prefix and suffix combination.
fn candidates(keyword: &str) -> Vec<String> {
    let keyword = keyword.to_lowercase();
    let mut ideas = vec![keyword.clone()];
    ideas.extend(PREFIXES.iter().map(|p| format!("{} {}", p, keyword)));
    ideas.extend(SUFFIXES.iter().map(|s| format!("{} {}", keyword, s)));
    for prefix in PREFIXES {
        ideas.extend(SUFFIXES.iter().map(|s| format!("{} {} {}", prefix, keyword, s)));
    }
    ideas
}

impl Tool for KeywordResearch {
    fn name(&self) -> &'static str {
        "keyword_research"
    }

    fn description(&self) -> &'static str {
        "Related keyword ideas with simulated volume, difficulty and CPC"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Research
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let (keyword, count) = self.parse(params)?;
        let mut rng = rng_for(params)?;

        let mut ideas = candidates(keyword);
        // the seed keyword always leads; the rest are shuffled
        ideas[1..].shuffle(&mut rng);
        ideas.truncate(count);

        let rows = ideas
            .into_iter()
            .enumerate()
            .map(|(rank, idea)| {
                // longer phrases are searched less and easier to rank for
                let words = idea.split_whitespace().count() as f64;
                let base = 60_000.0 / words.powi(2) / (rank as f64 + 1.0).sqrt();
                let volume = (base * rng.gen_range(0.5..1.5)).round().max(10.0);
                let difficulty =
                    (80.0 / words + rng.gen_range(0.0..25.0)).round().min(100.0) as u32;
                let cpc = rng.gen_range(0.2..4.0) * (difficulty as f64 / 50.0 + 0.5);
                vec![
                    idea,
                    format_number(volume, 0),
                    difficulty.to_string(),
                    format_currency(cpc, &self.currency_symbol),
                ]
            })
            .collect();

        Ok(TransformResult::Table {
            headers: ["Keyword", "Monthly Volume", "Difficulty", "CPC"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows,
        })
    }

    fn render_hints(&self) -> RenderHints {
        RenderHints {
            title: "Keyword Ideas",
            file_extension: "csv",
            filename_param: Some("keyword"),
            ..RenderHints::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(result: &TransformResult) -> &[Vec<String>] {
        match result {
            TransformResult::Table { rows, .. } => rows,
            other => panic!("expected table, got {}", other.kind()),
        }
    }

    #[test]
    fn requested_count_with_keyword_first() {
        let params = ToolParameters::new()
            .with_text("keyword", "Coffee Grinder")
            .with_number("count", 12.0);
        let result = KeywordResearch::default().transform(&params).unwrap();
        let rows = rows(&result);

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0][0], "coffee grinder");
        assert!(rows.iter().all(|row| row.len() == 4 && row[0].contains("coffee grinder")));
        assert!(rows.iter().all(|row| row[3].starts_with('$')));
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let tool = KeywordResearch::default();
        let a = ToolParameters::new().with_text("keyword", "tea").with_number("seed", 42.0);
        let b = ToolParameters::new().with_text("keyword", "tea").with_number("seed", 42.0);
        assert_eq!(tool.transform(&a).unwrap(), tool.transform(&b).unwrap());
    }

    #[test]
    fn count_limits() {
        let tool = KeywordResearch::default();
        for count in [0.0, 51.0, 2.5] {
            let params = ToolParameters::new()
                .with_text("keyword", "tea")
                .with_number("count", count);
            assert!(matches!(tool.validate(&params), Err(ToolError::Range(_))), "count {count}");
        }
        assert_eq!(
            tool.validate(&ToolParameters::new()),
            Err(ToolError::validation("Please enter a keyword"))
        );
    }

    #[test]
    fn fifty_ideas_available() {
        assert!(candidates("tea").len() >= 50);
    }
}
