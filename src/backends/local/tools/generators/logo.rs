// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use std::collections::HashMap;

use super::templates::{pick, render, rng_for};
use crate::errors::ToolError;
use crate::model::{ToolParameters, TransformResult};
use crate::traits::{RenderHints, Tool, ToolCategory};

const MAX_BRAND_LENGTH: usize = 30;
const WIDTH: u32 = 400;
const HEIGHT: u32 = 200;

struct LogoStyle {
    /// (background, primary, accent)
    palettes: &'static [(&'static str, &'static str, &'static str)],
    fonts: &'static [&'static str],
    emblems: &'static [&'static str],
    transform_brand: fn(&str) -> String,
}

static STYLES: Lazy<HashMap<&'static str, LogoStyle>> = Lazy::new(|| {
    HashMap::from([
        (
            "minimal",
            LogoStyle {
                palettes: &[("#ffffff", "#111111", "#888888"), ("#f7f7f7", "#222222", "#0077cc")],
                fonts: &["Helvetica, Arial, sans-serif", "Inter, sans-serif"],
                emblems: &[
                    r#"<line x1="150" y1="60" x2="250" y2="60" stroke="{accent}" stroke-width="3"/>"#,
                    r#"<circle cx="200" cy="55" r="8" fill="{accent}"/>"#,
                ],
                transform_brand: |brand| brand.to_lowercase(),
            },
        ),
        (
            "modern",
            LogoStyle {
                palettes: &[("#0f172a", "#38bdf8", "#f472b6"), ("#111827", "#34d399", "#fbbf24")],
                fonts: &["Montserrat, sans-serif", "Poppins, sans-serif"],
                emblems: &[
                    r#"<rect x="180" y="30" width="40" height="40" rx="10" fill="{accent}"/>"#,
                    r#"<polygon points="200,25 225,70 175,70" fill="{accent}"/>"#,
                ],
                transform_brand: |brand| brand.to_string(),
            },
        ),
        (
            "vintage",
            LogoStyle {
                palettes: &[("#f5ecd7", "#5b3a29", "#a0522d"), ("#efe6d0", "#2f4f4f", "#8b0000")],
                fonts: &["Georgia, serif", "'Playfair Display', serif"],
                emblems: &[
                    r#"<circle cx="200" cy="100" r="90" fill="none" stroke="{accent}" stroke-width="4"/>"#,
                    r#"<rect x="20" y="20" width="360" height="160" fill="none" stroke="{accent}" stroke-width="3" stroke-dasharray="6 4"/>"#,
                ],
                transform_brand: |brand| brand.to_uppercase(),
            },
        ),
        (
            "playful",
            LogoStyle {
                palettes: &[("#fff7ed", "#ea580c", "#8b5cf6"), ("#ecfeff", "#0891b2", "#f43f5e")],
                fonts: &["'Comic Neue', cursive", "'Baloo 2', cursive"],
                emblems: &[
                    r#"<circle cx="170" cy="50" r="14" fill="{accent}"/><circle cx="230" cy="50" r="10" fill="{primary}"/>"#,
                    r#"<path d="M150 60 Q200 10 250 60" fill="none" stroke="{accent}" stroke-width="5" stroke-linecap="round"/>"#,
                ],
                transform_brand: |brand| brand.to_string(),
            },
        ),
    ])
});

const DOCUMENT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
  <rect width="100%" height="100%" fill="{background}"/>
  {emblem}
  <text x="50%" y="{brand_y}" text-anchor="middle" font-family="{font}" font-size="{font_size}" fill="{primary}">{brand}</text>
{tagline_element}</svg>
"#;

const TAGLINE: &str = r#"  <text x="50%" y="160" text-anchor="middle" font-family="{font}" font-size="16" fill="{accent}">{tagline}</text>
"#;

/// SVG wordmark in one of four styles.
pub struct LogoMaker;

struct LogoInput<'a> {
    brand: &'a str,
    style: &'static LogoStyle,
    tagline: Option<&'a str>,
}

impl LogoMaker {
    pub fn new() -> Self {
        Self
    }

    fn parse<'a>(&self, params: &'a ToolParameters) -> Result<LogoInput<'a>, ToolError> {
        let brand = params.required_text("brand", "Please enter a brand name")?;
        if brand.chars().count() > MAX_BRAND_LENGTH {
            return Err(ToolError::range(format!(
                "Brand name must be at most {} characters",
                MAX_BRAND_LENGTH
            )));
        }

        let style_name = params.choice("style", "modern");
        let style = STYLES
            .get(style_name.as_str())
            .ok_or_else(|| ToolError::validation(format!("Unknown logo style '{}'", style_name)))?;

        Ok(LogoInput {
            brand,
            style,
            tagline: params.optional_text("tagline"),
        })
    }
}

impl Default for LogoMaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for LogoMaker {
    fn name(&self) -> &'static str {
        "logo_maker"
    }

    fn description(&self) -> &'static str {
        "SVG wordmark for a brand name"
    }

    fn category(&self) -> ToolCategory {
        ToolCategory::Generator
    }

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError> {
        self.parse(params).map(|_| ())
    }

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError> {
        let input = self.parse(params)?;
        let mut rng = rng_for(params)?;

        let (background, primary, accent) = input
            .style
            .palettes
            .choose(&mut rng)
            .copied()
            .unwrap_or(("#ffffff", "#000000", "#666666"));
        let font = xml_escape(pick(&mut rng, input.style.fonts));
        let colors = [("primary", primary), ("accent", accent)];
        let emblem = render(pick(&mut rng, input.style.emblems), &colors);

        let brand = xml_escape(&(input.style.transform_brand)(input.brand));
        let font_size = font_size_for(input.brand).to_string();
        let brand_y = if input.tagline.is_some() { "120" } else { "130" };

        let tagline_element = match input.tagline {
            Some(tagline) => {
                let tagline = xml_escape(tagline);
                render(
                    TAGLINE,
                    &[("font", font.as_str()), ("accent", accent), ("tagline", tagline.as_str())],
                )
            }
            None => String::new(),
        };

        let width = WIDTH.to_string();
        let height = HEIGHT.to_string();
        let svg = render(
            DOCUMENT,
            &[
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("background", background),
                ("emblem", emblem.as_str()),
                ("brand_y", brand_y),
                ("font", font.as_str()),
                ("font_size", font_size.as_str()),
                ("primary", primary),
                ("brand", brand.as_str()),
                ("tagline_element", tagline_element.as_str()),
            ],
        );

        Ok(TransformResult::text(svg))
    }

    fn render_hints(&self) -> RenderHints {
        RenderHints {
            title: "Your Logo",
            file_extension: "svg",
            filename_param: Some("brand"),
            ..RenderHints::default()
        }
    }
}

/// Shrink long names so they fit the canvas.
fn font_size_for(brand: &str) -> u32 {
    match brand.chars().count() {
        0..=8 => 56,
        9..=16 => 42,
        17..=24 => 32,
        _ => 26,
    }
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
