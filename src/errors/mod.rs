// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod factory;
mod presenter;
mod tool;

pub use config::{ConfigError, ValidationError};
pub use factory::ToolFactoryError;
pub use presenter::{ClipboardError, PresentError};
pub use tool::ToolError;
