use serde::Serialize;
use std::fmt;

use crate::errors::ToolError;
use crate::model::{ToolParameters, TransformResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Calculator,
    Generator,
    Rewriter,
    Checker,
    Research,
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ToolCategory::Calculator => "calculator",
            ToolCategory::Generator => "generator",
            ToolCategory::Rewriter => "rewriter",
            ToolCategory::Checker => "checker",
            ToolCategory::Research => "research",
        };
        f.pad(label)
    }
}

/// How the presenter should treat a tool's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderHints {
    pub title: &'static str,
    pub file_extension: &'static str,
    pub copyable: bool,
    pub downloadable: bool,
    /// Parameter whose value names downloaded files.
    pub filename_param: Option<&'static str>,
}

impl Default for RenderHints {
    fn default() -> Self {
        Self {
            title: "Result",
            file_extension: "txt",
            copyable: true,
            downloadable: true,
            filename_param: None,
        }
    }
}

/// A pure parameter → result transform plus the metadata a UI needs to host it.
///
/// `transform` must not rely on `validate` having been called first; it
/// performs the same checks and returns the same errors.
pub trait Tool: Send + Sync {
    /// Implementation name, as used in configuration.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn category(&self) -> ToolCategory;

    fn validate(&self, params: &ToolParameters) -> Result<(), ToolError>;

    fn transform(&self, params: &ToolParameters) -> Result<TransformResult, ToolError>;

    fn render_hints(&self) -> RenderHints {
        RenderHints::default()
    }
}
