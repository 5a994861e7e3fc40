// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two tool entries share an ID
    DuplicateToolId {
        /// The duplicate tool ID
        tool_id: String,
    },
    /// A tool entry references an implementation that isn't built in
    UnknownImplementation {
        /// The tool that has the unknown implementation
        tool_id: String,
        /// The implementation name as written in the config
        implementation: String,
    },
    /// Progress increment outside 1..=100
    InvalidProgressIncrement {
        increment: u8,
    },
    /// Progress tick interval of zero while progress is enabled
    ZeroTickInterval,
    /// Slug length of zero would produce empty filenames
    ZeroSlugLength,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateToolId { tool_id } => {
                write!(f, "Duplicate tool ID: '{}'", tool_id)
            }
            ValidationError::UnknownImplementation {
                tool_id,
                implementation,
            } => {
                write!(
                    f,
                    "Tool '{}' uses implementation '{}' which does not exist",
                    tool_id, implementation
                )
            }
            ValidationError::InvalidProgressIncrement { increment } => {
                write!(
                    f,
                    "Progress increment must be between 1 and 100, got {}",
                    increment
                )
            }
            ValidationError::ZeroTickInterval => {
                write!(f, "Progress tick interval must be greater than zero")
            }
            ValidationError::ZeroSlugLength => {
                write!(f, "Download slug length must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
