// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for tool instantiation from configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolFactoryError {
    /// The configured implementation name is not a built-in tool.
    #[error("Unknown tool implementation '{implementation}' for tool '{tool_id}'")]
    UnknownImplementation {
        tool_id: String,
        implementation: String,
    },

    /// An entry in `options` has the wrong shape for the tool.
    #[error("Invalid option '{option}' for tool '{tool_id}': {reason}")]
    InvalidOption {
        tool_id: String,
        option: String,
        reason: String,
    },
}
