// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// A clipboard write was refused or the clipboard backend is unavailable.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Failures surfaced by the result presenter. All are non-fatal.
#[derive(Error, Debug)]
pub enum PresentError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to write download '{}': {source}", .path.display())]
    Download {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("This result cannot be copied")]
    NotCopyable,

    #[error("This result cannot be downloaded")]
    NotDownloadable,
}
