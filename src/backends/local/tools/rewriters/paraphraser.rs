// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{rewrite, Strategy};
use crate::errors::ToolError;
use crate::model::{ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};

fn strategies_for(style: &str) -> Option<&'static [Strategy]> {
    let strategies: &'static [Strategy] = match style {
        "standard" => &[Strategy::Synonyms(0)],
        "fluent" => &[Strategy::Condense, Strategy::Synonyms(1)],
        "formal" => &[Strategy::Formalize, Strategy::Synonyms(2)],
        "creative" => &[Strategy::ReorderClauses, Strategy::Synonyms(1)],
        "concise" => &[Strategy::Condense],
        _ => return None,
    };
    Some(strategies)
}

/// Paraphrases text in one of five styles.
pub struct Paraphraser;

impl Paraphraser {
    pub fn new() -> Self {
        Self
    }

    fn parse<'a>(
        &self,
        params: &'a ToolParameters,
    ) -> Result<(&'a str, &'static [Strategy]), ToolError> {
        let text = params.required_text("text", "Please enter text to paraphrase")?;
        let style = params.choice("style", "standard");
        let strategies = strategies_for(&style)
            .ok_or_else(|| ToolError::validation(format!("Unknown paraphrasing style '{}'", style)))?;
        Ok((text, strategies))
    }
}

impl Default for Paraphraser {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for Paraphraser {
    fn name(&self) -> &'static str {
        "paraphraser"
    }

    fn description(&self) -> &'static str {
        "Rewrites text in a standard, fluent, formal, creative or concise style"
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
            title: "Paraphrased Text",
            ..RenderHints::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles() {
        let tool = Paraphraser::new();
        let input = "Basically, it's a very big problem. We need help in order to fix it.";
        let cases = vec![
            ("standard", "Basically, it's a extremely large issue. We require assist in order to fix it."),
            ("concise", "It's a big problem. We need help to fix it."),
            ("formal", "Basically, it is a really sizable challenge. We lack support in order to fix it."),
        ];

        for (style, expected) in cases {
            let params = ToolParameters::new()
                .with_text("text", input)
                .with_choice("style", style);
            let result = tool.transform(&params).unwrap();
            assert_eq!(result.as_text(), Some(expected), "style {style}");
        }
    }

    #[test]
    fn similarity_reported() {
        let params = ToolParameters::new().with_text("text", "Nothing to swap here.");
        match Paraphraser::new().transform(&params).unwrap() {
            TransformResult::Rewrite { similarity, .. } => assert_eq!(similarity, 100),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn missing_text() {
        assert_eq!(
            Paraphraser::new().validate(&ToolParameters::new().with_text("text", "   ")),
            Err(ToolError::validation("Please enter text to paraphrase"))
        );
        let bad_style = ToolParameters::new()
            .with_text("text", "hi")
            .with_choice("style", "pirate");
        assert!(Paraphraser::new().validate(&bad_style).is_err());
    }
}
