// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Template-driven text generators.
//!
//! Generators never branch per style combination. They look up sentence
//! templates in rule tables keyed by the selected options, render them with
//! one interpreter ([`templates::render`]), then run a substitution table
//! keyed by tone or level over the assembled text.

pub mod essay;
pub mod logo;
pub mod paragraph;
pub mod templates;

pub use essay::EssayWriter;
pub use logo::LogoMaker;
pub use paragraph::ParagraphWriter;
