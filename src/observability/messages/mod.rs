// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the event at its level with structured fields.
//!
//! # Organization
//!
//! * `engine` - session state transitions and progress runs
//! * `tool` - tool factory and registry events
//! * `presenter` - result presentation side effects
//! * `validation` - configuration validation warnings and errors

pub mod engine;
pub mod presenter;
pub mod tool;
pub mod validation;

use tracing::Span;

/// Emit a message as a `tracing` event at the level that fits it.
pub trait StructuredLog {
    fn log(&self);

    /// A span carrying the message's fields, for messages that open a unit of work.
    fn span(&self, _name: &str) -> Span {
        Span::none()
    }
}
