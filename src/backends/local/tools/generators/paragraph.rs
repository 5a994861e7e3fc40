// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::templates::{pick, pick_distinct, render, rng_for, SubstitutionTable};
use crate::errors::ToolError;
use crate::model::{ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};
use crate::utils::capitalize_first;

const OPENERS: &[&str] = &[
    "{topic} is a subject worth understanding well.",
    "When people talk about {topic}, they often miss the bigger picture.",
    "There is more to {topic} than first meets the eye.",
    "{topic} has become part of everyday conversation.",
];

const SUPPORTING: &[&str] = &[
    "It shapes decisions that affect a great many people.",
    "Its effects can be seen in both small and large ways.",
    "Understanding it helps make better choices.",
    "Experts have studied it for years and keep finding new details.",
    "It is also easy to get wrong without a little care.",
    "Several factors work together to give it its character.",
    "Examples from daily life make the idea easy to grasp.",
];

const CLOSERS: &[&str] = &[
    "In short, {topic} deserves attention.",
    "All of this makes {topic} worth a closer look.",
    "That is why {topic} matters.",
];

static TONES: Lazy<HashMap<&'static str, SubstitutionTable>> = Lazy::new(|| {
    HashMap::from([
        ("informative", SubstitutionTable::empty()),
        (
            "persuasive",
            SubstitutionTable::compile(&[
                (r"deserves attention\.", "demands our attention now."),
                (r"worth a closer look\.", "impossible to ignore."),
                (r"\bhelps\b", "empowers us to"),
                (r"\bworth understanding well\b", "that everyone should care about"),
            ]),
        ),
        (
            "casual",
            SubstitutionTable::compile(&[
                (r"\bIt is\b", "It's"),
                (r"\bThere is\b", "There's"),
                (r"\bThat is\b", "That's"),
                (r"\ba great many\b", "loads of"),
                (r"\bIn short,", "Basically,"),
                (r"\bExperts\b", "Folks who know this stuff"),
            ]),
        ),
        (
            "formal",
            SubstitutionTable::compile(&[
                (r"\bIt's\b", "It is"),
                (r"\ba little care\b", "appropriate diligence"),
                (r"\bIn short,", "In summary,"),
                (r"\bbig\b", "broad"),
                (r"\beasy to grasp\b", "readily comprehensible"),
                (r"\bmake better choices\b", "inform sound decisions"),
            ]),
        ),
    ])
});

/// Single paragraph of 3, 5 or 7 sentences.
pub struct ParagraphWriter;

impl ParagraphWriter {
    pub fn new() -> Self {
        Self
    }

    fn sentence_count(params: &ToolParameters) -> Result<usize, ToolError> {
        match params.choice("length", "medium").as_str() {
            "short" => Ok(3),
            "medium" => Ok(5),
            "long" => Ok(7),
            other => Err(ToolError::validation(format!(
                "Unknown paragraph length '{}' (expected short, medium or long)",
                other
            ))),
        }
    }

    fn tone(params: &ToolParameters) -> Result<&'static SubstitutionTable, ToolError> {
        let tone = params.choice("tone", "informative");
        TONES
            .get(tone.as_str())
            .ok_or_else(|| ToolError::validation(format!("Unknown tone '{}'", tone)))
    }
}

impl Default for ParagraphWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for ParagraphWriter {
    fn name(&self) -> &'static str {
        "paragraph_writer"
    }

    fn description(&self) -> &'static str {
        "One paragraph about a topic in the selected tone and length"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Generator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        params.required_text("topic", "Please enter a topic")?;
        Self::sentence_count(params)?;
        Self::tone(params)?;
        Ok(())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        self.validate(params)?;
        let topic = params.required_text("topic", "Please enter a topic")?;
        let sentences = Self::sentence_count(params)?;
        let tone = Self::tone(params)?;
        let mut rng = rng_for(params)?;
        let vars = [("topic", topic)];

        let mut parts = vec![capitalize_first(&render(pick(&mut rng, OPENERS), &vars))];
        parts.extend(
            pick_distinct(&mut rng, SUPPORTING, sentences - 2)
                .into_iter()
                .map(|s| render(s, &vars)),
        );
        parts.push(render(pick(&mut rng, CLOSERS), &vars));

        Ok(TransformResult::text(tone.apply(&parts.join(" "))))
    }

    fn render_hints(&self) -> RenderHints {
        RenderHints {
            title: "Paragraph",
            filename_param: Some("topic"),
            ..RenderHints::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::split_sentences;

    #[test]
    fn length_controls_sentence_count() {
        let tool = ParagraphWriter::new();
        let cases = vec![("short", 3), ("medium", 5), ("long", 7)];

        for (length, expected) in cases {
            let params = ToolParameters::new()
                .with_text("topic", "urban gardening")
                .with_choice("length", length);
            let result = tool.transform(&params).unwrap();
            let text = result.as_text().unwrap();
            assert_eq!(split_sentences(text).len(), expected, "length {length}");
            assert!(text.starts_with(|c: char| c.is_uppercase()));
        }
    }

    #[test]
    fn casual_tone_uses_contractions() {
        let params = ToolParameters::new()
            .with_text("topic", "urban gardening")
            .with_choice("tone", "casual")
            .with_choice("length", "long");
        let result = ParagraphWriter::new().transform(&params).unwrap();
        assert!(!result.as_text().unwrap().contains("It is "));
    }

    #[test]
    fn rejects_unknown_options() {
        let tool = ParagraphWriter::new();
        let base = ToolParameters::new().with_text("topic", "tea");
        assert!(tool.validate(&base).is_ok());
        assert!(tool.validate(&base.clone().with_choice("tone", "sarcastic")).is_err());
        assert!(tool.validate(&base.with_choice("length", "epic")).is_err());
        assert_eq!(
            tool.validate(&ToolParameters::new()),
            Err(ToolError::validation("Please enter a topic"))
        );
    }
}
