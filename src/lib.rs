// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // built-in tools + factory
pub mod config;     // config + registry
pub mod engine;     // progress simulator + sessions
pub mod errors;     // error handling
pub mod model;      // parameters, results, check reports
pub mod observability;
pub mod presenter;  // render, copy, download
pub mod traits;     // unified abstractions
pub mod utils;
