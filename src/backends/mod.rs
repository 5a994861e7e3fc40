// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Tool backend implementations for The Toolbench.
//!
//! Every tool implements the [`Tool`](crate::traits::Tool) trait and is
//! instantiated through a configuration-driven factory.
//!
//! # Available Backends
//!
//! ## Local Backend
//! In-process Rust tools, grouped by category:
//! - **Calculators**: Age, percentage, margin, BMI, loan, confidence interval
//! - **Generators**: Essays, paragraphs, SVG logos
//! - **Rewriters**: Paraphrasing, rewording, sentence changes
//! - **Checkers**: Grammar, punctuation and sentence checks with fix suggestions
//! - **Research**: Keyword ideas with simulated metrics
//!
//! # Architecture
//!
//! ```text
//! Configuration → Factory → Tool Instance → Registry → Session
//! ```
//!
//! # Examples
//!
//! ```rust
//! use the_toolbench::backends::local::LocalToolFactory;
//! use the_toolbench::config::ToolConfig;
//!
//! let config = ToolConfig::new("loan", "loan_calculator").with_option("currency_symbol", "€");
//! let tool = LocalToolFactory::create_tool(&config)?;
//! assert_eq!(tool.name(), "loan_calculator");
//! # Ok::<(), the_toolbench::errors::ToolFactoryError>(())
//! ```

pub mod local;
