// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for tool instantiation and registry events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};

/// Tool instantiation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::tool::ToolInstantiationFailed;
///
/// let msg = ToolInstantiationFailed {
///     tool_id: "loan",
///     implementation: "loan_calculator",
///     reason: "currency_symbol must be a string",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ToolInstantiationFailed<'a> {
    pub tool_id: &'a str,
    pub implementation: &'a str,
    pub reason: &'a str,
}

impl Display for ToolInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate tool '{}' with implementation '{}': {}",
            self.tool_id, self.implementation, self.reason
        )
    }
}

impl StructuredLog for ToolInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            tool_id = self.tool_id,
            implementation = self.implementation,
            reason = self.reason,
            "{}", self
        );
    }
}

/// Registry populated.
///
/// # Log Level
/// `debug!` - Startup detail
pub struct RegistryBuilt {
    pub tool_count: usize,
    pub from_config: bool,
}

impl Display for RegistryBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let source = if self.from_config { "configuration" } else { "built-in catalog" };
        write!(f, "Tool registry built from {} with {} tools", source, self.tool_count)
    }
}

impl StructuredLog for RegistryBuilt {
    fn log(&self) {
        tracing::debug!(
            tool_count = self.tool_count,
            from_config = self.from_config,
            "{}", self
        );
    }
}
