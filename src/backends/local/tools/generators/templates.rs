// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use regex::{Captures, Regex};

use crate::errors::ToolError;
use crate::model::ToolParameters;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"));

/// Fill `{name}` placeholders from `vars`. Unknown placeholders are kept verbatim.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Ordered regex rewrite rules applied to generated text.
pub struct SubstitutionTable {
    rules: Vec<(Regex, &'static str)>,
}

impl SubstitutionTable {
    /// Compile `(pattern, replacement)` pairs. Patterns are compile-time
    /// constants, so an invalid one is a programming error.
    pub fn compile(rules: &[(&'static str, &'static str)]) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|(pattern, replacement)| {
                    (
                        Regex::new(pattern).expect("substitution pattern is valid"),
                        *replacement,
                    )
                })
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (pattern, replacement)| {
                pattern.replace_all(&acc, *replacement).into_owned()
            })
    }
}

/// Generator RNG: the `seed` parameter when given, otherwise a hash of the
/// whole parameter record.
pub fn rng_for(params: &ToolParameters) -> Result<StdRng, ToolError> {
    let seed = match params.optional_number("seed")? {
        Some(seed) => seed.abs() as u64,
        None => params.fingerprint(),
    };
    Ok(StdRng::seed_from_u64(seed))
}

pub fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// `count` distinct templates, cycling through the table when it is shorter.
pub fn pick_distinct<'a>(rng: &mut StdRng, options: &[&'a str], count: usize) -> Vec<&'a str> {
    let mut shuffled: Vec<&'a str> = options.to_vec();
    shuffled.shuffle(rng);
    shuffled.into_iter().cycle().take(count).collect()
}

/// "the future of rust" → "The Future of Rust".
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            let minor = matches!(
                lower.as_str(),
                "a" | "an" | "the" | "and" | "or" | "but" | "in" | "on" | "at" | "to" | "for" | "of" | "with" | "by"
            );
            if i > 0 && minor {
                lower
            } else {
                crate::utils::capitalize_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
