// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::utils::word_tokens;

/// Jaccard overlap of the lowercase word sets of `original` and `rewritten`,
/// as a percent rounded to the nearest 5.
///
/// Two texts without any words are considered identical.
///
/// # Example
/// ```
/// use the_toolbench::backends::local::tools::rewriters::similarity::similarity;
///
/// assert_eq!(similarity("the cat sat", "the cat sat"), 100);
/// assert_eq!(similarity("the cat sat", "a dog ran"), 0);
/// assert_eq!(similarity("the cat sat", "the cat ran"), 50);
/// ```
pub fn similarity(original: &str, rewritten: &str) -> u8 {
    let a = word_set(original);
    let b = word_set(rewritten);

    let union = a.union(&b).count();
    if union == 0 {
        return 100;
    }
    let intersection = a.intersection(&b).count();

    let percent = intersection as f64 / union as f64 * 100.0;
    ((percent / 5.0).round() * 5.0) as u8
}

fn word_set(text: &str) -> HashSet<String> {
    word_tokens(text).map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_rounding() {
        let cases = vec![
            ("Same words here", "same WORDS here", 100),
            ("alpha beta", "gamma delta", 0),
            ("", "", 100),
            ("", "something", 0),
            // 2 shared of 3 total = 66.7 → 65
            ("one two", "one two three", 65),
        ];
        for (a, b, expected) in cases {
            assert_eq!(similarity(a, b), expected, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn always_a_multiple_of_five() {
        let original = "The quick brown fox jumps over the lazy dog";
        let rewritten = "A fast brown fox leaps over the idle dog";
        let value = similarity(original, rewritten);
        assert_eq!(value % 5, 0);
        assert!(value <= 100);
    }
}
