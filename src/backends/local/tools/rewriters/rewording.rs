// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{rewrite, Strategy};
use crate::errors::ToolError;
use crate::model::{ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};

const VARIANTS: [&[Strategy]; 3] = [
    &[Strategy::Synonyms(0)],
    &[Strategy::Synonyms(1), Strategy::ReorderClauses],
    &[Strategy::Formalize, Strategy::Synonyms(2)],
];

/// Three alternative wordings of the same text, selected by `variant`.
pub struct RewordingTool;

impl RewordingTool {
    pub fn new() -> Self {
        Self
    }

    fn parse<'a>(
        &self,
        params: &'a ToolParameters,
    ) -> Result<(&'a str, &'static [Strategy]), ToolError> {
        let text = params.required_text("text", "Please enter text to reword")?;
        let variant = params.optional_number("variant")?.unwrap_or(0.0);
        if variant < 0.0 || variant.fract() != 0.0 || variant as usize >= VARIANTS.len() {
            return Err(ToolError::range(format!(
                "Variant must be between 0 and {}",
                VARIANTS.len() - 1
            )));
        }
        Ok((text, VARIANTS[variant as usize]))
    }
}

impl Default for RewordingTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for RewordingTool {
    fn name(&self) -> &'static str {
        "rewording_tool"
    }

    fn description(&self) -> &'static str {
        "Alternative wording of a passage, one of three variants"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Rewriter
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let (text, strategies) = self.parse(params)?;
        Ok(rewrite(text, strategies))
    }

    fn render_hints(&self) -> RenderHints {
        RenderHints {
            title: "Reworded Text",
            ..RenderHints::default()
        }
    }
}
