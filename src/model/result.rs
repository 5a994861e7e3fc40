// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::model::CheckReport;

/// One named value of a structured calculator result.
///
/// `value` holds the raw number (when there is one) so callers can reason about
/// it; `display` is the formatted string the presenter shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordField {
    pub name: String,
    pub label: String,
    pub value: Option<f64>,
    pub display: String,
}

impl RecordField {
    pub fn number(name: &str, label: &str, value: f64, display: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: Some(value),
            display: display.into(),
        }
    }

    pub fn text(name: &str, label: &str, display: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: None,
            display: display.into(),
        }
    }
}

/// Output of one tool run, held until the next submit or clear.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformResult {
    Text {
        text: String,
    },
    Record {
        fields: Vec<RecordField>,
    },
    Rewrite {
        text: String,
        /// Percent overlap with the original, in steps of 5.
        similarity: u8,
    },
    Check(CheckReport),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl TransformResult {
    pub fn text(text: impl Into<String>) -> Self {
        TransformResult::Text { text: text.into() }
    }

    pub fn record(fields: Vec<RecordField>) -> Self {
        TransformResult::Record { fields }
    }

    pub fn field(&self, name: &str) -> Option<&RecordField> {
        match self {
            TransformResult::Record { fields } => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(|f| f.value)
    }

    pub fn display(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.display.as_str())
    }

    /// The primary text of text-like results.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TransformResult::Text { text } | TransformResult::Rewrite { text, .. } => Some(text),
            TransformResult::Check(report) => Some(report.text()),
            _ => None,
        }
    }

    pub fn as_check(&self) -> Option<&CheckReport> {
        match self {
            TransformResult::Check(report) => Some(report),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TransformResult::Text { .. } => "text",
            TransformResult::Record { .. } => "record",
            TransformResult::Rewrite { .. } => "rewrite",
            TransformResult::Check(_) => "check",
            TransformResult::Table { .. } => "table",
        }
    }
}
