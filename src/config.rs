use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pager::DEFAULT_WINDOW_SIZE;
use crate::render::OutputFormat;

/// Upper bound on `pager.window_size` and `--window`; every link is allocated.
pub const MAX_WINDOW_SIZE: u32 = 1000;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. "info" or "pagebar=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagerConfig {
    /// Maximum number of page links shown at once.
    #[serde(default = "default_window_size")]
    pub window_size: u32,
    /// Page size used when the page count is derived from an item count.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_previous_label")]
    pub previous_label: String,
    #[serde(default = "default_next_label")]
    pub next_label: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            items_per_page: default_items_per_page(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            previous_label: default_previous_label(),
            next_label: default_next_label(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pager.window_size == 0 {
            return Err(ConfigError::Invalid(
                "pager.window_size must be at least 1".to_string(),
            ));
        }
        if self.pager.window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::Invalid(format!(
                "pager.window_size must be at most {MAX_WINDOW_SIZE}"
            )));
        }
        if self.pager.items_per_page == 0 {
            return Err(ConfigError::Invalid(
                "pager.items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_size() -> u32 {
    DEFAULT_WINDOW_SIZE
}

fn default_items_per_page() -> u32 {
    30
}

fn default_previous_label() -> String {
    "«".to_string()
}

fn default_next_label() -> String {
    "»".to_string()
}
