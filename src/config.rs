//! Configuration management for Taskpad
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, CONFIG_LOCAL_FILE, TICK_RATE_DEFAULT_MS,
    TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme for checkboxes and titles
    /// Options: "ascii", "unicode", "emoji"
    pub icon_theme: IconTheme,
    /// Event loop tick rate in milliseconds
    pub tick_rate_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Strike through completed tasks
    pub strike_completed: bool,
    /// Dim completed tasks
    pub dim_completed: bool,
    /// Show key hints in the status bar
    pub show_hints: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Log level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file path, defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            strike_completed: true,
            dim_completed: true,
            show_hints: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate the configuration in a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// A `taskpad.toml` in the working directory wins over the XDG location
    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_LOCAL_FILE);
        if local.exists() {
            return Some(local);
        }

        let xdg = dirs::config_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        xdg.exists().then_some(xdg)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(TICK_RATE_MIN_MS..=TICK_RATE_MAX_MS).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {} milliseconds, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        if let Err(e) = self.logging.level.parse::<log::LevelFilter>() {
            anyhow::bail!("Invalid log level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Write a commented default configuration file, creating directories as needed
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Failed to serialize default config")?;
        let header = format!(
            "# Taskpad Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        std::fs::write(path, header + &body)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.display());
        Ok(())
    }

    /// Default config file location under the XDG config directory
    pub fn get_default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
