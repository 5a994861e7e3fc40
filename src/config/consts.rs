// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Milliseconds between progress ticks
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
/// Percent added per progress tick (ten ticks per run)
pub const DEFAULT_PROGRESS_INCREMENT: u8 = 10;
/// Currency symbol used by money-formatting tools
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
/// Maximum length of a download filename stem
pub const DEFAULT_SLUG_MAX_LENGTH: usize = 50;
/// Directory downloads are written to
pub const DEFAULT_DOWNLOAD_DIR: &str = ".";
/// Filename stem used when a slug comes out empty
pub const UNTITLED_SLUG: &str = "untitled";
