// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Validation never stops at the first problem: every check runs and all
//! errors are returned together so a config can be fixed in one pass.
//!
//! # Checks
//!
//! 1. **Tool IDs**: every `tools[].id` is unique
//! 2. **Implementations**: every `tools[].impl` names a built-in tool
//! 3. **Progress**: `increment` in 1..=100, non-zero `tick_interval_ms` when enabled
//! 4. **Presenter**: non-zero `slug_max_length`
//!
//! # Example
//! ```rust
//! use the_toolbench::config::{validate_config, Config, ToolConfig};
//! use the_toolbench::errors::ValidationError;
//!
//! let mut config = Config::default();
//! config.tools = vec![
//!     ToolConfig::new("bmi", "bmi_calculator"),
//!     ToolConfig::new("bmi", "essay_writer"),
//! ];
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::DuplicateToolId { tool_id: "bmi".to_string() }]
//! );
//! ```

use std::collections::HashSet;

use crate::backends::local::LocalToolFactory;
use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    DuplicateToolId, UnknownImplementation, ValidationCompleted, ValidationFailed,
    ValidationStarted,
};
use crate::observability::messages::StructuredLog;

/// Validate a configuration, collecting every error.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let started = ValidationStarted {
        tool_count: cfg.tools.len(),
    };
    started.log();
    let _guard = started.span("validate_config").entered();

    let mut errors = Vec::new();
    errors.extend(validate_tools(cfg));
    errors.extend(validate_progress(cfg));
    errors.extend(validate_presenter(cfg));

    if errors.is_empty() {
        ValidationCompleted {
            tool_count: cfg.tools.len(),
        }
        .log();
        Ok(())
    } else {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

fn validate_tools(cfg: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for tool in &cfg.tools {
        if !seen.insert(tool.id.as_str()) {
            DuplicateToolId { tool_id: &tool.id }.log();
            errors.push(ValidationError::DuplicateToolId {
                tool_id: tool.id.clone(),
            });
        }

        if !LocalToolFactory::is_implementation_available(&tool.impl_) {
            UnknownImplementation {
                tool_id: &tool.id,
                implementation: &tool.impl_,
            }
            .log();
            errors.push(ValidationError::UnknownImplementation {
                tool_id: tool.id.clone(),
                implementation: tool.impl_.clone(),
            });
        }
    }

    errors
}

fn validate_progress(cfg: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let progress = &cfg.progress;

    if !(1..=100).contains(&progress.increment) {
        errors.push(ValidationError::InvalidProgressIncrement {
            increment: progress.increment,
        });
    }
    if progress.enabled && progress.tick_interval_ms == 0 {
        errors.push(ValidationError::ZeroTickInterval);
    }

    errors
}

fn validate_presenter(cfg: &Config) -> Vec<ValidationError> {
    if cfg.presenter.slug_max_length == 0 {
        vec![ValidationError::ZeroSlugLength]
    } else {
        Vec::new()
    }
}
