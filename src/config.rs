// Global configuration management

use crate::engine::EntryDefaults;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub startup: StartupConfig,

    /// Values used when an optional answer is left blank while adding a file
    #[serde(default)]
    pub defaults: EntryDefaults,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Clear the terminal before every redraw of the queue
    #[serde(default = "default_true_config")]
    pub clear_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a log file next to the config file
    #[serde(default = "default_true_config")]
    pub enabled: bool,

    /// tracing filter directive, e.g. "info" or "kcoder=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true_config() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            clear_screen: default_true_config(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true_config(),
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Directory holding config.toml and kcoder.log
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("kcoder")
        } else {
            // Linux, Windows and others
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("kcoder")
        };

        Ok(config_dir)
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the path to the log file
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("kcoder.log"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // A read-only config dir is not fatal; built-in defaults still apply
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'kcoder init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    /// Read and parse a config file at an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Serialize to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
