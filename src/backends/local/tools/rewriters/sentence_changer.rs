// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{rewrite, Strategy};
use crate::errors::ToolError;
use crate::model::{ToolParameters, TransformResult};
use crate::traits::{Tool, ToolCategory};

pub struct SentenceChanger;

impl SentenceChanger {
    pub fn new() -> Self {
        Self
    }

    fn parse<'a>(&self, params: &'a ToolParameters) -> Result<(&'a str, Strategy), ToolError> {
        let text = params.required_text("text", "Please enter a sentence to change")?;
        let strategy = match params.choice("mode", "synonyms").as_str() {
            "synonyms" => Strategy::Synonyms(0),
            "restructure" => Strategy::ReorderClauses,
            "tense" => Strategy::TenseSwap,
            other => {
                return Err(ToolError::validation(format!(
                    "Unknown mode '{}' (expected synonyms, restructure or tense)",
                    other
                )))
            }
        };
        Ok((text, strategy))
    }
}

impl Default for SentenceChanger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for SentenceChanger {
    fn name(&self) -> &'static str {
        "sentence_changer"
    }

    fn description(&self) -> &'static str {
        "Changes sentences by swapping words, reordering clauses or shifting tense"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Rewriter
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let (text, strategy) = self.parse(params)?;
        Ok(rewrite(text, &[strategy]))
    }
}
