use anyhow::{Context, Result};
use chrono::NaiveDate;
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = ".lifecalc";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub dates: DatesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub state: StateConfig,
}

/// Zone in which a bare date is read as midnight.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DatesConfig {
    #[serde(default)]
    pub timezone: DateZone,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    /// chrono strftime pattern used when echoing dates back to the user
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_progress_precision")]
    pub progress_precision: usize,
    #[serde(default = "default_progress_bar_width")]
    pub progress_bar_width: usize,
    #[serde(default = "default_group_digits")]
    pub group_digits: bool,
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

fn default_progress_precision() -> usize {
    1
}

fn default_progress_bar_width() -> usize {
    40
}

fn default_group_digits() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            progress_precision: default_progress_precision(),
            progress_bar_width: default_progress_bar_width(),
            group_digits: default_group_digits(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateConfig {
    /// Optional override for state directory (for testing)
    pub state_dir_override: Option<PathBuf>,
}

impl DisplayConfig {
    pub const MAX_BAR_WIDTH: usize = 200;
    pub const MAX_PRECISION: usize = 6;

    pub fn validate(&self) -> Result<()> {
        if self.progress_bar_width == 0 || self.progress_bar_width > Self::MAX_BAR_WIDTH {
            anyhow::bail!(
                "Progress bar width must be between 1 and {}",
                Self::MAX_BAR_WIDTH
            );
        }
        if self.progress_precision > Self::MAX_PRECISION {
            anyhow::bail!(
                "Progress precision must be at most {} decimals",
                Self::MAX_PRECISION
            );
        }

        // An unknown specifier only surfaces as a fmt::Error when rendered.
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31).context("Invalid sample date")?;
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.date_format)).is_err() {
            anyhow::bail!("Invalid date format '{}'", self.date_format);
        }

        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.display.validate()?;
        Ok(())
    }
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(APP_DIR))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

/// Load `~/.lifecalc/config.toml`, falling back to defaults when it does not exist.
pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config = load_from_path(&config_path)?;
    config.validate()?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml_string).context("Failed to write config file")?;

    Ok(())
}
