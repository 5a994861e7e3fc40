// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Every diagnostic and operational log line in the toolbench is built from a
//! message struct with a `Display` implementation, so wording lives in one
//! place and log output stays consistent.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - session and progress-run lifecycle
//! * `messages::tool` - tool instantiation and registry events
//! * `messages::presenter` - clipboard, download and notice events
//! * `messages::validation` - configuration validation
//!
//! # Usage
//!
//! ```rust
//! use the_toolbench::observability::messages::engine::RunStarted;
//! use the_toolbench::observability::messages::StructuredLog;
//!
//! let msg = RunStarted {
//!     tool_id: "bmi",
//!     parameter_count: 3,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
