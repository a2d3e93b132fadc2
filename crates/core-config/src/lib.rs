//! Configuration loading and parsing.
//!
//! Parses `linedit.toml` (or an override path provided by the binary).
//! Two tables are recognized:
//!
//! * `[history]` - undo depth and whether the cursor is clamped into the
//!   document restored by undo/redo.
//! * `[render]` - display options for the line listing (escape codes, line
//!   numbers, keyword highlighting).
//!
//! Every field has a default, so a missing file, a missing table or a
//! missing key all fall back silently. Unknown fields are ignored. A file
//! that fails to parse falls back to defaults with a `config` warning.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// Default undo depth (matches `core_state::UNDO_HISTORY_MAX`).
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

pub const CONFIG_FILE_NAME: &str = "linedit.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default = "HistoryConfig::default_depth")]
    pub depth: usize,
    #[serde(default = "HistoryConfig::default_clamp_cursor")]
    pub clamp_cursor: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            depth: Self::default_depth(),
            clamp_cursor: Self::default_clamp_cursor(),
        }
    }
}

impl HistoryConfig {
    const fn default_depth() -> usize {
        DEFAULT_HISTORY_DEPTH
    }
    const fn default_clamp_cursor() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_true")]
    pub ansi: bool,
    #[serde(default = "RenderConfig::default_true")]
    pub line_numbers: bool,
    #[serde(default = "RenderConfig::default_true")]
    pub highlight_keywords: bool,
    #[serde(default = "RenderConfig::default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ansi: true,
            line_numbers: true,
            highlight_keywords: true,
            keywords: Self::default_keywords(),
        }
    }
}

impl RenderConfig {
    const fn default_true() -> bool {
        true
    }
    fn default_keywords() -> Vec<String> {
        ["int", "return", "if", "else", "for", "while", "void"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Same options with all escape codes disabled.
    pub fn plain(mut self) -> Self {
        self.ansi = false;
        self
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File the settings came from; `None` when defaults are in effect.
    pub source: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("linedit").join(CONFIG_FILE_NAME);
    }
    local
}

/// Parse configuration text. Errors carry TOML location detail.
pub fn parse(content: &str) -> Result<ConfigFile> {
    toml::from_str::<ConfigFile>(content).context("invalid linedit configuration")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match parse(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), depth = file.history.depth, clamp_cursor = file.history.clamp_cursor, "config_loaded");
            Ok(Config {
                source: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %format!("{e:#}"), "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Undo depth with the lower bound applied.
    pub fn history_depth(&self) -> usize {
        self.file.history.depth.max(1)
    }
}
