// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("sentence pattern is valid"));
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z]+)?").expect("word pattern is valid"));

/// Split on terminal punctuation, keeping the punctuation with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Give `replacement` the casing pattern of `original`: ALL CAPS, Capitalized
/// or left as is.
pub fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        replacement.to_uppercase()
    } else if letters.first().is_some_and(|c| c.is_uppercase()) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_keep_their_punctuation() {
        let sentences = split_sentences("First one. Second one!  Third?! trailing");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third?!", "trailing"]);
    }

    #[test]
    fn tokens_keep_contractions() {
        let tokens: Vec<&str> = word_tokens("Don't stop, it's 2024!").collect();
        assert_eq!(tokens, vec!["Don't", "stop", "it's", "2024"]);
    }

    #[test]
    fn first_letter_casing() {
        assert_eq!(capitalize_first("élan vital"), "Élan vital");
        assert_eq!(lowercase_first("The Cat"), "the Cat");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn case_matching() {
        assert_eq!(match_case("Big", "large"), "Large");
        assert_eq!(match_case("BIG", "large"), "LARGE");
        assert_eq!(match_case("big", "large"), "large");
        assert_eq!(match_case("I", "me"), "Me");
    }
}
