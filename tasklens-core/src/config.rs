//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/tasklens/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/tasklens/` (~/.config/tasklens/)
//! - Data: `$XDG_DATA_HOME/tasklens/` (~/.local/share/tasklens/)
//! - State/Logs: `$XDG_STATE_HOME/tasklens/` (~/.local/state/tasklens/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Upper bound on the number of task types listed in a report.
pub const MAX_TOP_TASKS: usize = 3;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_DATA_HOME or ~/.local/share
fn xdg_data_home() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/share"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Default locations of the event log and the two report files
    #[serde(default)]
    pub paths: PathsConfig,

    /// Insights generation settings
    #[serde(default)]
    pub insights: InsightsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// File locations. Unset entries fall back to the data directory.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PathsConfig {
    /// Event log consumed by the engine and appended to by the logger
    pub event_log: Option<PathBuf>,
    /// Tabular (CSV) report output
    pub report_csv: Option<PathBuf>,
    /// Structured (JSON) report output
    pub report_json: Option<PathBuf>,
}

impl PathsConfig {
    /// Event log path, or `$XDG_DATA_HOME/tasklens/user_behavior_log.csv`
    pub fn event_log(&self) -> PathBuf {
        self.event_log
            .clone()
            .unwrap_or_else(|| Config::data_dir().join("user_behavior_log.csv"))
    }

    /// CSV report path, or `$XDG_DATA_HOME/tasklens/insights_report.csv`
    pub fn report_csv(&self) -> PathBuf {
        self.report_csv
            .clone()
            .unwrap_or_else(|| Config::data_dir().join("insights_report.csv"))
    }

    /// JSON report path, or `$XDG_DATA_HOME/tasklens/insights.json`
    pub fn report_json(&self) -> PathBuf {
        self.report_json
            .clone()
            .unwrap_or_else(|| Config::data_dir().join("insights.json"))
    }
}

/// Insights generation configuration
#[derive(Debug, Deserialize, Clone)]
pub struct InsightsConfig {
    /// Number of completed task types to rank (clamped to [`MAX_TOP_TASKS`])
    #[serde(default = "default_top_tasks_count")]
    pub top_tasks_count: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            top_tasks_count: default_top_tasks_count(),
        }
    }
}

impl InsightsConfig {
    /// Effective ranking length after clamping.
    pub fn top_tasks_limit(&self) -> usize {
        self.top_tasks_count.min(MAX_TOP_TASKS)
    }
}

fn default_top_tasks_count() -> usize {
    MAX_TOP_TASKS
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/tasklens/config.toml` (~/.config/tasklens/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("tasklens").join("config.toml")
    }

    /// Returns the data directory path (event log and reports)
    ///
    /// `$XDG_DATA_HOME/tasklens/` (~/.local/share/tasklens/)
    pub fn data_dir() -> PathBuf {
        xdg_data_home().join("tasklens")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/tasklens/` (~/.local/state/tasklens/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("tasklens")
    }
}
