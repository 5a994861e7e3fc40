// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_DOWNLOAD_DIR, DEFAULT_PROGRESS_INCREMENT, DEFAULT_SLUG_MAX_LENGTH,
    DEFAULT_TICK_INTERVAL_MS,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration for a toolbench runtime.
///
/// Every section is optional; an empty file yields the built-in defaults and
/// the full tool catalog.
///
/// # Fields
/// * `progress` - Progress simulator timing
/// * `presenter` - Download and clipboard settings
/// * `tools` - Tool table; empty means every built-in under its canonical ID
///
/// # Example
/// ```yaml
/// progress:
///   enabled: true
///   tick_interval_ms: 100
///   increment: 10
/// presenter:
///   download_dir: "./downloads"
///   slug_max_length: 50
///   clipboard_command: ["xclip", "-selection", "clipboard"]
/// tools:
///   - id: loan
///     impl: loan_calculator
///     options:
///       currency_symbol: "€"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub presenter: PresenterConfig,
    #[serde(default)]
    pub tools: Vec<ToolConfig>,
}

/// Progress simulator settings.
///
/// With `enabled: false` every run jumps straight to 100%.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub enabled: bool,
    pub tick_interval_ms: u64,
    pub increment: u8,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            increment: DEFAULT_PROGRESS_INCREMENT,
        }
    }
}

/// Result presenter settings.
///
/// # Fields
/// * `download_dir` - Directory downloads are written to
/// * `slug_max_length` - Maximum length of a download filename stem
/// * `clipboard_command` - External command that receives copied text on
///   stdin; without one, copies go to an in-memory clipboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub download_dir: PathBuf,
    pub slug_max_length: usize,
    pub clipboard_command: Option<Vec<String>>,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            slug_max_length: DEFAULT_SLUG_MAX_LENGTH,
            clipboard_command: None,
        }
    }
}

/// One hosted tool.
///
/// # Fields
/// * `id` - Unique identifier the tool is addressed by
/// * `impl_` - Built-in implementation name (`impl` in the file)
/// * `options` - Implementation-specific options
///
/// # Example
/// ```yaml
/// id: "margin"
/// impl: margin_calculator
/// options:
///   currency_symbol: "£"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolConfig {
    pub id: String,
    #[serde(rename = "impl")]
    pub impl_: String,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

impl ToolConfig {
    pub fn new(id: impl Into<String>, implementation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            impl_: implementation.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }
}

/// Load a config file. `.toml` files are parsed as TOML, anything else as YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let cfg = if is_toml {
        toml::from_str(&content)?
    } else {
        parse_yaml(&content)?
    };
    Ok(cfg)
}

/// An empty YAML document is a valid, all-defaults config.
fn parse_yaml(content: &str) -> Result<Config, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content)
}

/// Load a config file and validate it.
///
/// All validation problems are reported together in
/// [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
