// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::UNTITLED_SLUG;

/// Filesystem-safe filename stem.
///
/// Lowercases `basis`, collapses every run of non-alphanumeric characters
/// into one `-`, trims `-` from both ends and truncates to `max_length`
/// characters. An empty result becomes `untitled`.
///
/// # Example
/// ```
/// use the_toolbench::presenter::slugify;
///
/// assert_eq!(slugify("  Climate Change: Causes & Effects! ", 50), "climate-change-causes-effects");
/// assert_eq!(slugify("???", 50), "untitled");
/// ```
pub fn slugify(basis: &str, max_length: usize) -> String {
    let mut slug = String::with_capacity(basis.len());
    let mut pending_dash = false;

    for c in basis.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    let truncated: String = slug.chars().take(max_length).collect();
    let trimmed = truncated.trim_end_matches('-');
    if trimmed.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}
