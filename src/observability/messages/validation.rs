// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Tool table validation (duplicate IDs, unknown implementations)
//! * Progress and presenter settings validation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Duplicate tool ID detected in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::validation::DuplicateToolId;
///
/// let msg = DuplicateToolId {
///     tool_id: "loan",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateToolId<'a> {
    pub tool_id: &'a str,
}

impl Display for DuplicateToolId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate tool ID: '{}'", self.tool_id)
    }
}

impl StructuredLog for DuplicateToolId<'_> {
    fn log(&self) {
        tracing::error!(tool_id = self.tool_id, "{}", self);
    }
}

/// Tool references an implementation that isn't built in.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownImplementation<'a> {
    pub tool_id: &'a str,
    pub implementation: &'a str,
}

impl Display for UnknownImplementation<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' references unknown implementation '{}'",
            self.tool_id, self.implementation
        )
    }
}

impl StructuredLog for UnknownImplementation<'_> {
    fn log(&self) {
        tracing::error!(
            tool_id = self.tool_id,
            implementation = self.implementation,
            "{}", self
        );
    }
}

/// Configuration validation started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::validation::ValidationStarted;
///
/// let msg = ValidationStarted {
///     tool_count: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ValidationStarted {
    pub tool_count: usize,
}

impl Display for ValidationStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting configuration validation for {} tools",
            self.tool_count
        )
    }
}

impl StructuredLog for ValidationStarted {
    fn log(&self) {
        tracing::info!(tool_count = self.tool_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "config_validation",
            name = name,
            tool_count = self.tool_count,
        )
    }
}

/// Configuration validation completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ValidationCompleted {
    pub tool_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation completed successfully for {} tools",
            self.tool_count
        )
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        tracing::info!(tool_count = self.tool_count, "{}", self);
    }
}

/// Configuration validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed {
///     error_count: 3,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }
}
