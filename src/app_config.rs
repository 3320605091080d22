use anyhow::{Context, Result};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::ConfigError;
use crate::teleprompter::{
    DEFAULT_FONT_SIZE_PX, DEFAULT_SPEED_WPM, MAX_FONT_SIZE_PX, MAX_SPEED_WPM, MIN_FONT_SIZE_PX,
    MIN_SPEED_WPM, TeleprompterSettings,
};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Teleprompter playback defaults
    #[serde(default)]
    pub teleprompter: TeleprompterConfig,

    /// Terminal output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Teleprompter playback defaults
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeleprompterConfig {
    /// Reading speed in words per minute
    #[serde(default = "default_speed_wpm")]
    pub speed_wpm: u32,

    /// Font size in pixels
    #[serde(default = "default_font_size_px")]
    pub font_size_px: u32,
}

impl Default for TeleprompterConfig {
    fn default() -> Self {
        Self {
            speed_wpm: default_speed_wpm(),
            font_size_px: default_font_size_px(),
        }
    }
}

impl TeleprompterConfig {
    // @returns: Playback settings built from this config
    pub fn settings(&self) -> TeleprompterSettings {
        TeleprompterSettings::new(self.speed_wpm, self.font_size_px)
    }
}

/// Terminal output settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Whether to color markers in highlighted output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_speed_wpm() -> u32 {
    DEFAULT_SPEED_WPM
}

fn default_font_size_px() -> u32 {
    DEFAULT_FONT_SIZE_PX
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate().context("Configuration validation failed")?;
        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }

    /// Load the config at `path`, or write and return the default one
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speed = self.teleprompter.speed_wpm;
        if !(MIN_SPEED_WPM..=MAX_SPEED_WPM).contains(&speed) {
            return Err(ConfigError::Invalid {
                field: "teleprompter.speed_wpm",
                message: format!("{} is outside {}..={}", speed, MIN_SPEED_WPM, MAX_SPEED_WPM),
            });
        }

        let font = self.teleprompter.font_size_px;
        if !(MIN_FONT_SIZE_PX..=MAX_FONT_SIZE_PX).contains(&font) {
            return Err(ConfigError::Invalid {
                field: "teleprompter.font_size_px",
                message: format!("{} is outside {}..={}", font, MIN_FONT_SIZE_PX, MAX_FONT_SIZE_PX),
            });
        }

        Ok(())
    }
}
