// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for result presentation side effects.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Rendered result written to the clipboard.
///
/// # Log Level
/// `debug!`
pub struct ResultCopied {
    pub bytes: usize,
}

impl Display for ResultCopied {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Copied {} bytes to clipboard", self.bytes)
    }
}

impl StructuredLog for ResultCopied {
    fn log(&self) {
        tracing::debug!(bytes = self.bytes, "{}", self);
    }
}

/// Clipboard refused the write.
///
/// # Log Level
/// `warn!` - Non-fatal, reported to the user
///
/// # Example
/// ```
/// use the_toolbench::observability::messages::presenter::ClipboardWriteFailed;
///
/// let msg = ClipboardWriteFailed { reason: "permission denied" };
/// tracing::warn!("{}", msg);
/// ```
pub struct ClipboardWriteFailed<'a> {
    pub reason: &'a str,
}

impl Display for ClipboardWriteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Clipboard write failed: {}", self.reason)
    }
}

impl StructuredLog for ClipboardWriteFailed<'_> {
    fn log(&self) {
        tracing::warn!(reason = self.reason, "{}", self);
    }
}

/// Result saved as a file.
///
/// # Log Level
/// `info!`
pub struct DownloadWritten<'a> {
    pub path: &'a Path,
    pub bytes: usize,
}

impl Display for DownloadWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Wrote {} bytes to {}", self.bytes, self.path.display())
    }
}

impl StructuredLog for DownloadWritten<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            bytes = self.bytes,
            "{}", self
        );
    }
}

/// A user-facing notice (toast) was raised.
pub struct NoticeRaised<'a> {
    pub level: &'a str,
    pub message: &'a str,
}

impl Display for NoticeRaised<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

impl StructuredLog for NoticeRaised<'_> {
    fn log(&self) {
        match self.level {
            "error" => tracing::warn!(notice_level = self.level, "{}", self),
            _ => tracing::info!(notice_level = self.level, "{}", self),
        }
    }
}
