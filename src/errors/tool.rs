// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors a tool reports back to the person filling in its form.
//!
//! Both variants carry a message meant to be shown as-is (inline or as a
//! toast). Neither is fatal: the caller simply resubmits with new input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// Required input is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// Input parsed fine but lies outside the allowed domain.
    #[error("{0}")]
    Range(String),
}

impl ToolError {
    pub fn validation(message: impl Into<String>) -> Self {
        ToolError::Validation(message.into())
    }

    pub fn range(message: impl Into<String>) -> Self {
        ToolError::Range(message.into())
    }

    /// The message as shown to the user.
    pub fn user_message(&self) -> &str {
        match self {
            ToolError::Validation(message) | ToolError::Range(message) => message,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Validation(_) => "validation",
            ToolError::Range(_) => "range",
        }
    }
}
