// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, PresenterConfig, ToolRegistry};
use crate::engine::ProgressSimulator;
use crate::errors::ToolFactoryError;
use crate::presenter::{CommandClipboard, MemoryClipboard, ResultPresenter};
use crate::traits::{ClipboardWriter, Notifier};

/// Toolbench runtime builder - resolves the tool registry, progress simulator
/// and presenter settings from configuration.
///
/// # Examples
///
/// ```
/// use the_toolbench::config::{Config, RuntimeBuilder};
///
/// let config = Config::default();
/// let (registry, simulator, presenter) = RuntimeBuilder::from_config(&config).unwrap();
///
/// assert!(registry.get("bmi_calculator").is_some());
/// assert_eq!(simulator.ticks_per_run(), 10);
/// assert_eq!(presenter.slug_max_length, 50);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the runtime pieces from configuration.
    ///
    /// Creates and returns:
    /// - `ToolRegistry`: every configured tool, or the full catalog
    /// - `ProgressSimulator`: per the `progress` section; instant when disabled
    /// - `PresenterConfig`: download and clipboard settings
    pub fn from_config(
        cfg: &Config,
    ) -> Result<(ToolRegistry, ProgressSimulator, PresenterConfig), ToolFactoryError> {
        let registry = ToolRegistry::from_config(cfg)?;
        let simulator = Self::simulator(cfg);
        Ok((registry, simulator, cfg.presenter.clone()))
    }

    pub fn simulator(cfg: &Config) -> ProgressSimulator {
        if cfg.progress.enabled {
            ProgressSimulator::new(
                Duration::from_millis(cfg.progress.tick_interval_ms),
                cfg.progress.increment,
            )
        } else {
            ProgressSimulator::instant()
        }
    }

    /// Clipboard named by `clipboard_command`, or an in-memory one.
    pub fn clipboard(settings: &PresenterConfig) -> Arc<dyn ClipboardWriter> {
        match settings.clipboard_command.as_deref() {
            Some([program, args @ ..]) => Arc::new(CommandClipboard::new(program, args.to_vec())),
            _ => Arc::new(MemoryClipboard::default()),
        }
    }

    pub fn presenter(settings: PresenterConfig, notifier: Arc<dyn Notifier>) -> ResultPresenter {
        let clipboard = Self::clipboard(&settings);
        ResultPresenter::new(settings, clipboard, notifier)
    }
}
