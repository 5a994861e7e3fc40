// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod format;
pub mod text;

pub use format::{format_currency, format_number, round_to};
pub use text::{capitalize_first, lowercase_first, match_case, split_sentences, word_tokens};
