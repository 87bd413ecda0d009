//! # Calculator Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STAMP_MAX_STAMPS=8                                                 │
//! │     STAMP_OUTPUT_FORMAT=json                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $STAMP_CONFIG, or                                                  │
//! │     ~/.config/stamp-calculator/calculator.toml (Linux)                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # calculator.toml
//! [limits]
//! max_stamps = 12          # largest accepted MAX STAMPS answer
//! max_denominations = 40   # most STAMP lines accepted
//!
//! [input]
//! reprompt_parameters = false  # ask again on a bad GOAL/CAP/MAX answer
//!
//! [output]
//! format = "text"          # text | json
//! # decimal_places = 6     # round totals; unset prints them exactly
//! total_width = 8
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stamp_core::display::DisplayOptions;
use stamp_core::{DEFAULT_MAX_DENOMINATIONS, DEFAULT_MAX_STAMPS};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Largest scale a `rust_decimal::Decimal` can carry.
const MAX_DECIMAL_PLACES: u32 = 28;

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Output Format
// =============================================================================

/// How results are printed once entry is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Grouped, human-readable lines.
    #[default]
    Text,

    /// A single pretty-printed JSON document.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Bounds applied before the search runs.
///
/// The search branches once per denomination per stamp placed, so these
/// keep an interactive run from taking minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitSettings {
    #[serde(default = "default_max_stamps")]
    pub max_stamps: u32,

    #[serde(default = "default_max_denominations")]
    pub max_denominations: usize,
}

fn default_max_stamps() -> u32 {
    DEFAULT_MAX_STAMPS
}

fn default_max_denominations() -> usize {
    DEFAULT_MAX_DENOMINATIONS
}

impl Default for LimitSettings {
    fn default() -> Self {
        LimitSettings {
            max_stamps: default_max_stamps(),
            max_denominations: default_max_denominations(),
        }
    }
}

/// Prompt behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSettings {
    /// Ask again after an unusable GOAL, CAP or MAX STAMPS answer instead
    /// of ending the session.
    #[serde(default)]
    pub reprompt_parameters: bool,
}

/// Result rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Rounds totals in text output. Unset keeps them exact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,

    #[serde(default = "default_total_width")]
    pub total_width: usize,
}

fn default_total_width() -> usize {
    8
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::default(),
            decimal_places: None,
            total_width: default_total_width(),
        }
    }
}

impl OutputSettings {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            decimal_places: self.decimal_places,
            total_width: self.total_width,
        }
    }
}

// =============================================================================
// Calculator Config
// =============================================================================

/// Complete calculator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub limits: LimitSettings,

    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl CalculatorConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$STAMP_CONFIG`, or the platform path)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let path = config_path
            .or_else(|| std::env::var_os("STAMP_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading calculator config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses TOML text. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.limits.max_stamps == 0 {
            return Err(ConfigError::InvalidValue(
                "limits.max_stamps must be greater than 0".into(),
            ));
        }

        if self.limits.max_denominations == 0 {
            return Err(ConfigError::InvalidValue(
                "limits.max_denominations must be greater than 0".into(),
            ));
        }

        if let Some(places) = self.output.decimal_places {
            if places > MAX_DECIMAL_PLACES {
                return Err(ConfigError::InvalidValue(format!(
                    "output.decimal_places must be at most {}, got {}",
                    MAX_DECIMAL_PLACES, places
                )));
            }
        }

        Ok(())
    }

    /// Applies `STAMP_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unparseable values are
    /// logged and skipped.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("STAMP_MAX_STAMPS") {
            match value.parse::<u32>() {
                Ok(n) => {
                    debug!(max_stamps = n, "Overriding max stamps from environment");
                    self.limits.max_stamps = n;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid STAMP_MAX_STAMPS"),
            }
        }

        if let Some(value) = lookup("STAMP_MAX_DENOMINATIONS") {
            match value.parse::<usize>() {
                Ok(n) => self.limits.max_denominations = n,
                Err(_) => warn!(value = %value, "Ignoring invalid STAMP_MAX_DENOMINATIONS"),
            }
        }

        if let Some(value) = lookup("STAMP_REPROMPT") {
            match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.input.reprompt_parameters = true,
                "0" | "false" | "no" => self.input.reprompt_parameters = false,
                _ => warn!(value = %value, "Ignoring invalid STAMP_REPROMPT"),
            }
        }

        if let Some(value) = lookup("STAMP_OUTPUT_FORMAT") {
            match value.parse::<OutputFormat>() {
                Ok(format) => {
                    debug!(%format, "Overriding output format from environment");
                    self.output.format = format;
                }
                Err(e) => warn!(error = %e, "Ignoring STAMP_OUTPUT_FORMAT"),
            }
        }

        if let Some(value) = lookup("STAMP_DECIMAL_PLACES") {
            match value.parse::<u32>() {
                Ok(n) => self.output.decimal_places = Some(n),
                Err(_) => warn!(value = %value, "Ignoring invalid STAMP_DECIMAL_PLACES"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "stamp", "stamp-calculator")
            .map(|dirs| dirs.config_dir().join("calculator.toml"))
    }
}
