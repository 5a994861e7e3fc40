// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Result presentation: rendering, clipboard copies and file downloads.
//!
//! The presenter never decides *whether* a result exists; it receives one from
//! a completed session and turns it into text, a clipboard write or a file.
//! Every failure here is non-fatal: the user gets an error notice and the
//! session keeps its result.

mod clipboard;
mod notifier;
mod render;
mod slug;

pub use clipboard::{CommandClipboard, MemoryClipboard};
pub use notifier::{RecordingNotifier, TracingNotifier};
pub use render::{render, render_table};
pub use slug::slugify;

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::PresenterConfig;
use crate::errors::PresentError;
use crate::model::{ToolParameters, TransformResult};
use crate::observability::messages::presenter::{
    ClipboardWriteFailed, DownloadWritten, ResultCopied,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{ClipboardWriter, Notice, Notifier, RenderHints};

const CSV_EXTENSION: &str = "csv";

/// Renders, copies and downloads tool results.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use the_toolbench::config::PresenterConfig;
/// use the_toolbench::model::TransformResult;
/// use the_toolbench::presenter::{MemoryClipboard, RecordingNotifier, ResultPresenter};
///
/// let presenter = ResultPresenter::new(
///     PresenterConfig::default(),
///     Arc::new(MemoryClipboard::default()),
///     Arc::new(RecordingNotifier::default()),
/// );
///
/// assert_eq!(presenter.render(&TransformResult::text("Hello")), "Hello");
/// ```
pub struct ResultPresenter {
    settings: PresenterConfig,
    clipboard: Arc<dyn ClipboardWriter>,
    notifier: Arc<dyn Notifier>,
}

impl ResultPresenter {
    pub fn new(
        settings: PresenterConfig,
        clipboard: Arc<dyn ClipboardWriter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            clipboard,
            notifier,
        }
    }

    pub fn settings(&self) -> &PresenterConfig {
        &self.settings
    }

    pub fn render(&self, result: &TransformResult) -> String {
        render(result)
    }

    /// Write the rendered result to the clipboard.
    ///
    /// A refused write raises an error notice and is returned as
    /// [`PresentError::Clipboard`]; the result itself is untouched.
    pub async fn copy(
        &self,
        result: &TransformResult,
        hints: &RenderHints,
    ) -> Result<(), PresentError> {
        if !hints.copyable {
            self.notifier.notify(Notice::error(PresentError::NotCopyable.to_string()));
            return Err(PresentError::NotCopyable);
        }

        let text = render(result);
        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                ResultCopied { bytes: text.len() }.log();
                self.notifier.notify(Notice::success("Copied to clipboard"));
                Ok(())
            }
            Err(err) => {
                ClipboardWriteFailed { reason: &err.0 }.log();
                self.notifier
                    .notify(Notice::error("Could not copy to clipboard"));
                Err(err.into())
            }
        }
    }

    /// Save the result as a file in the configured download directory.
    ///
    /// The filename is the slug of `basis` plus the result's extension:
    /// tables are written as CSV, everything else as rendered text with
    /// `hints.file_extension`. Returns the written path.
    pub async fn download(
        &self,
        result: &TransformResult,
        hints: &RenderHints,
        basis: &str,
    ) -> Result<PathBuf, PresentError> {
        let outcome = self.write_download(result, hints, basis).await;
        match &outcome {
            Ok(path) => self
                .notifier
                .notify(Notice::success(format!("Saved {}", path.display()))),
            Err(err) => self.notifier.notify(Notice::error(err.to_string())),
        }
        outcome
    }

    async fn write_download(
        &self,
        result: &TransformResult,
        hints: &RenderHints,
        basis: &str,
    ) -> Result<PathBuf, PresentError> {
        if !hints.downloadable {
            return Err(PresentError::NotDownloadable);
        }

        let (bytes, extension) = match result {
            TransformResult::Table { headers, rows } => (to_csv(headers, rows)?, CSV_EXTENSION),
            other => (render(other).into_bytes(), hints.file_extension),
        };

        let dir = &self.settings.download_dir;
        let path = dir.join(format!(
            "{}.{}",
            slugify(basis, self.settings.slug_max_length),
            extension
        ));

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| PresentError::Download {
                path: dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| PresentError::Download {
                path: path.clone(),
                source,
            })?;

        DownloadWritten {
            path: &path,
            bytes: bytes.len(),
        }
        .log();
        Ok(path)
    }
}

/// The text a download filename is derived from: the tool's filename
/// parameter when it was filled in, otherwise the result title.
pub fn filename_basis<'a>(hints: &'a RenderHints, params: &'a ToolParameters) -> &'a str {
    hints
        .filename_param
        .and_then(|name| params.optional_text(name))
        .unwrap_or(hints.title)
}

fn to_csv(headers: &[String], rows: &[Vec<String>]) -> Result<Vec<u8>, PresentError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| PresentError::Csv(csv::Error::from(e.into_error())))
}
