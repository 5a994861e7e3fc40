// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request-scoped data passed between the input collector, the tools and the
//! result presenter. Nothing here outlives a single submit.

mod check;
mod params;
mod progress;
mod result;

pub use check::{CheckReport, Issue, IssueKind};
pub use params::{ParamValue, ToolParameters};
pub use progress::ProgressState;
pub use result::{RecordField, TransformResult};
