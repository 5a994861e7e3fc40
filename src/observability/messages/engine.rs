// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for tool session and progress-run events.
//!
//! This module contains message types for logging events related to:
//! * Session state transitions (validating, rejected, running, complete)
//! * Progress simulator ticks and cancellation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A submit passed validation and a run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::engine::RunStarted;
///
/// let msg = RunStarted {
///     tool_id: "loan",
///     parameter_count: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunStarted<'a> {
    pub tool_id: &'a str,
    pub parameter_count: usize,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' run started with {} parameters",
            self.tool_id, self.parameter_count
        )
    }
}

impl StructuredLog for RunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            tool_id = self.tool_id,
            parameter_count = self.parameter_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "tool_run",
            span_name = name,
            tool_id = self.tool_id,
            parameter_count = self.parameter_count,
        )
    }
}

/// A submit failed validation.
///
/// # Log Level
/// `warn!` - User input problem, not a system failure
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::engine::RunRejected;
///
/// let msg = RunRejected {
///     tool_id: "age",
///     kind: "validation",
///     reason: "Please enter a birth date",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct RunRejected<'a> {
    pub tool_id: &'a str,
    pub kind: &'a str,
    pub reason: &'a str,
}

impl Display for RunRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' rejected input ({}): {}",
            self.tool_id, self.kind, self.reason
        )
    }
}

impl StructuredLog for RunRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            tool_id = self.tool_id,
            kind = self.kind,
            reason = self.reason,
            "{}", self
        );
    }
}

/// The progress simulator ticked.
///
/// # Log Level
/// `trace!` - Very chatty
pub struct ProgressAdvanced<'a> {
    pub tool_id: &'a str,
    pub percent: u8,
}

impl Display for ProgressAdvanced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Tool '{}' progress {}%", self.tool_id, self.percent)
    }
}

impl StructuredLog for ProgressAdvanced<'_> {
    fn log(&self) {
        tracing::trace!(tool_id = self.tool_id, percent = self.percent, "{}", self);
    }
}

/// A run finished and its result is held by the session.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::engine::RunCompleted;
/// use std::time::Duration;
///
/// let msg = RunCompleted {
///     tool_id: "bmi",
///     result_kind: "record",
///     duration: Duration::from_millis(1000),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RunCompleted<'a> {
    pub tool_id: &'a str,
    pub result_kind: &'a str,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' run completed with {} result in {:?}",
            self.tool_id, self.result_kind, self.duration
        )
    }
}

impl StructuredLog for RunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            tool_id = self.tool_id,
            result_kind = self.result_kind,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// A run ended before reaching 100%, usually because a new submit replaced it.
///
/// # Log Level
/// `debug!` - Expected during normal use
pub struct RunCancelled<'a> {
    pub tool_id: &'a str,
    pub reached_percent: u8,
}

impl Display for RunCancelled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Tool '{}' run cancelled at {}%",
            self.tool_id, self.reached_percent
        )
    }
}

impl StructuredLog for RunCancelled<'_> {
    fn log(&self) {
        tracing::debug!(
            tool_id = self.tool_id,
            reached_percent = self.reached_percent,
            "{}", self
        );
    }
}
